// generate-font-atlas/src/error.rs
//
// Copyright © 2026 The Font Atlas Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fatal error conditions. The generator never recovers or retries; every
//! failure aborts the run.

use font_kit::error::{FontLoadingError, GlyphLoadingError, SelectionError};
use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// The requested font family could not be resolved.
    FontSelection(SelectionError),
    /// The resolved font resource failed to load.
    FontLoading(FontLoadingError),
    /// A glyph outline or metric could not be read from the font.
    Glyph(GlyphLoadingError),
    /// The font supplies no glyph for a symbol in the working set. There is
    /// no substitution policy.
    MissingGlyph(char),
    /// Writing the output raster failed.
    Image(image::ImageError),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::FontSelection(ref err) => write!(f, "font selection failed: {}", err),
            Error::FontLoading(ref err) => write!(f, "font loading failed: {}", err),
            Error::Glyph(ref err) => write!(f, "glyph loading failed: {}", err),
            Error::MissingGlyph(ch) => write!(f, "no glyph for {:?} (U+{:04X})", ch, ch as u32),
            Error::Image(ref err) => write!(f, "image encoding failed: {}", err),
            Error::Io(ref err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl error::Error for Error {}

impl From<SelectionError> for Error {
    fn from(err: SelectionError) -> Error {
        Error::FontSelection(err)
    }
}

impl From<FontLoadingError> for Error {
    fn from(err: FontLoadingError) -> Error {
        Error::FontLoading(err)
    }
}

impl From<GlyphLoadingError> for Error {
    fn from(err: GlyphLoadingError) -> Error {
        Error::Glyph(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Error {
        Error::Image(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}
