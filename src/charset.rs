// generate-font-atlas/src/charset.rs
//
// Copyright © 2026 The Font Atlas Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The fixed working character set: printable ASCII with one substitution.

/// Number of symbols in the working set.
pub const CHARSET_LEN: usize = 96;

/// Index of the substituted placeholder symbol.
pub const PLACEHOLDER_INDEX: usize = 95;

/// The bullet drawn in place of code point 127.
pub const PLACEHOLDER: char = '\u{2022}';

/// Returns the 96 symbols in code-point order 32..128, with the final slot
/// replaced by the placeholder bullet.
pub fn charset() -> Vec<char> {
    let mut glyphs: Vec<char> = (32u8..128).map(char::from).collect();
    glyphs[PLACEHOLDER_INDEX] = PLACEHOLDER;
    glyphs
}

#[cfg(test)]
mod test {
    use crate::charset::{charset, CHARSET_LEN, PLACEHOLDER, PLACEHOLDER_INDEX};

    #[test]
    fn test_charset_len() {
        assert_eq!(charset().len(), CHARSET_LEN);
    }

    #[test]
    fn test_charset_order() {
        let glyphs = charset();
        assert_eq!(glyphs[0], ' ');
        assert_eq!(glyphs[1], '!');
        assert_eq!(glyphs[33], 'A');
        assert_eq!(glyphs[94], '~');
    }

    #[test]
    fn test_placeholder_substitution() {
        let glyphs = charset();
        assert_eq!(glyphs[PLACEHOLDER_INDEX], PLACEHOLDER);
        assert!(!glyphs.contains(&'\u{7f}'));
    }
}
