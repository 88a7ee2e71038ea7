// generate-font-atlas/src/lib.rs
//
// Copyright © 2026 The Font Atlas Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Builds packed bitmap atlases for a fixed character set plus a fixed
//! inventory of vector UI icons, and emits the per-glyph advance table the
//! runtime renderer consumes.

#[macro_use]
extern crate log;

pub mod atlas;
pub mod charset;
pub mod descriptor;
pub mod error;
pub mod icons;
pub mod metrics;
pub mod surface;
pub mod swatches;

pub use crate::error::Error;

/// Point size every face is measured and rendered at.
pub const POINT_SIZE: f32 = 48.0;

/// Fixed number of glyph columns in the atlas grid.
pub const ATLAS_COLUMNS: usize = 16;

/// Total grid rows budgeted: one blank leading row, the icon row, and six
/// glyph rows.
pub const ATLAS_ROWS: usize = 8;

/// Grid row index of the first glyph row. Row 0 stays blank (the corner
/// swatches land there) and row 1 holds the icons on the monospaced atlas.
pub const GLYPH_ROW_OFFSET: usize = 2;
