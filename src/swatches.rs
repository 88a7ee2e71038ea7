// generate-font-atlas/src/swatches.rs
//
// Copyright © 2026 The Font Atlas Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rounded-corner reference swatches.
//!
//! Four filled rounded-square tiles and four stroked rounded corners, one per
//! radius, laid out in a single horizontal strip at the top-left of the
//! surface (inside the blank leading grid row). The stroked run continues
//! after the filled run; stacking a second 32-unit row below would not fit
//! inside one cell height for typical fonts. Tile coordinates are computed
//! absolutely; no context transform is carried between tiles.

use crate::surface::Surface;
use raqote::{LineCap, Path, PathBuilder};
use std::f32::consts::PI;

/// Square footprint of one swatch, in surface units.
pub const SWATCH_SIZE: f32 = 32.0;

/// Corner radii, one swatch per radius and style.
pub const SWATCH_RADII: [f32; 4] = [0.0, 8.0, 16.0, 24.0];

/// Horizontal distance between consecutive swatch origins.
pub const SWATCH_PITCH: f32 = SWATCH_SIZE + 4.0;

/// Stroke width of the stroked swatches.
pub const SWATCH_STROKE_WIDTH: f32 = 6.0;

pub fn draw_swatches(surface: &mut Surface) {
    for (index, &radius) in SWATCH_RADII.iter().enumerate() {
        let path = fill_tile_path(index as f32 * SWATCH_PITCH, 0.0, radius);
        surface.fill(&path);
    }

    // The stroke stays inside the 32-unit box by insetting half its width.
    let inset = SWATCH_STROKE_WIDTH * 0.5;
    let base = SWATCH_RADII.len() as f32 * SWATCH_PITCH;
    for (index, &radius) in SWATCH_RADII.iter().enumerate() {
        let path = corner_stroke_path(
            base + index as f32 * SWATCH_PITCH + inset,
            inset,
            radius,
        );
        surface.stroke(&path, SWATCH_STROKE_WIDTH, LineCap::Butt);
    }
}

/// A filled rounded square: top-left arc, straight top edge to the square's
/// top-right, down to bottom-right, closed along the bottom and left.
/// Radius 0 degenerates to a plain square.
pub(crate) fn fill_tile_path(origin_x: f32, origin_y: f32, radius: f32) -> Path {
    let mut builder = PathBuilder::new();
    builder.move_to(origin_x, origin_y + SWATCH_SIZE);
    builder.arc(origin_x + radius, origin_y + radius, radius, -PI, 0.5 * PI);
    builder.line_to(origin_x + SWATCH_SIZE, origin_y);
    builder.line_to(origin_x + SWATCH_SIZE, origin_y + SWATCH_SIZE);
    builder.close();
    builder.finish()
}

/// The stroked variant draws only the corner: the arc plus the two edges
/// meeting it.
pub(crate) fn corner_stroke_path(origin_x: f32, origin_y: f32, radius: f32) -> Path {
    let edge = SWATCH_SIZE - SWATCH_STROKE_WIDTH * 0.5;
    let mut builder = PathBuilder::new();
    builder.move_to(origin_x, origin_y + edge);
    builder.arc(origin_x + radius, origin_y + radius, radius, -PI, 0.5 * PI);
    builder.line_to(origin_x + edge, origin_y);
    builder.finish()
}
