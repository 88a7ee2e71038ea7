// generate-font-atlas/src/descriptor.rs
//
// Copyright © 2026 The Font Atlas Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The atlas descriptor: the textual table literal the consuming renderer
//! compiles in alongside the raster.

use crate::metrics::GeometryHint;
use crate::ATLAS_COLUMNS;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// Derives the symbolic texture name from the output filename:
/// `font-mono.png` becomes `TEX_FONT_MONO`.
pub fn texture_enum_name(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or(filename);
    format!("TEX_{}", stem.replace('-', "_").to_uppercase())
}

pub struct AtlasDescriptor {
    name: String,
    cell_width: i32,
    cell_height: i32,
    widths: Vec<f32>,
}

impl AtlasDescriptor {
    pub fn new(output_filename: &str, hint: &GeometryHint, widths: Vec<f32>)
               -> AtlasDescriptor {
        AtlasDescriptor {
            name: texture_enum_name(output_filename),
            cell_width: hint.cell_width,
            cell_height: hint.cell_height,
            widths,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn widths(&self) -> &[f32] {
        &self.widths
    }
}

impl fmt::Display for AtlasDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "    {}, {}, {}, {{", self.name, self.cell_width, self.cell_height)?;
        for row in self.widths.chunks(ATLAS_COLUMNS) {
            let cells: Vec<String> = row.iter().map(|&width| format!("{},", width as i32))
                                               .collect();
            writeln!(f, "        {}", cells.join(" "))?;
        }
        writeln!(f, "    }}")?;
        write!(f, "}},")
    }
}

#[cfg(test)]
mod test {
    use crate::charset::CHARSET_LEN;
    use crate::descriptor::{texture_enum_name, AtlasDescriptor};
    use crate::metrics::GeometryHint;

    fn test_hint() -> GeometryHint {
        GeometryHint {
            cell_width: 27,
            cell_height: 61,
            ink_bottom: 12.2,
            ink_top: -48.5,
        }
    }

    #[test]
    fn test_texture_enum_name() {
        assert_eq!(texture_enum_name("font-mono.png"), "TEX_FONT_MONO");
        assert_eq!(texture_enum_name("font-default.png"), "TEX_FONT_DEFAULT");
    }

    #[test]
    fn test_emission_format() {
        let widths = vec![26.9; CHARSET_LEN];
        let descriptor = AtlasDescriptor::new("font-mono.png", &test_hint(), widths);
        let text = descriptor.to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "{");
        assert_eq!(lines[1], "    TEX_FONT_MONO, 27, 61, {");
        // Six rows of sixteen truncated widths.
        for line in &lines[2..8] {
            assert_eq!(*line, format!("        {}", "26, ".repeat(16).trim_end()));
        }
        assert_eq!(lines[8], "    }");
        assert_eq!(lines[9], "},");
    }

    #[test]
    fn test_widths_truncate_toward_zero() {
        let mut widths = vec![10.0; CHARSET_LEN];
        widths[0] = 15.999;
        let descriptor = AtlasDescriptor::new("font-mono.png", &test_hint(), widths);
        let text = descriptor.to_string();
        assert!(text.contains("        15, 10,"));
    }
}
