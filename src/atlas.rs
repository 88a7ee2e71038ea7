// generate-font-atlas/src/atlas.rs
//
// Copyright © 2026 The Font Atlas Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-family atlas generation: the glyph placer plus the driver that strings
//! the two phases together and writes the outputs.

use crate::charset::charset;
use crate::descriptor::AtlasDescriptor;
use crate::error::Error;
use crate::icons;
use crate::metrics::{measure, FontFace, GeometryHint, GlyphExtents};
use crate::surface::Surface;
use crate::swatches;
use crate::{ATLAS_COLUMNS, GLYPH_ROW_OFFSET, POINT_SIZE};
use pathfinder_geometry::vector::Vector2F;
use std::path::Path;

/// One entry of the static family configuration list.
pub struct FontConfig {
    pub family: &'static str,
    pub bold: bool,
    /// Whether the icon row is packed into this atlas.
    pub icons: bool,
    pub output: &'static str,
}

/// Top-left corner of the glyph cell for working-set index `index`. Glyph
/// rows start two rows down; the rows above stay free for the swatch strip
/// and the icons.
pub fn cell_origin(index: usize, hint: &GeometryHint) -> Vector2F {
    Vector2F::new(
        ((index % ATLAS_COLUMNS) * hint.cell_width as usize) as f32,
        ((GLYPH_ROW_OFFSET + index / ATLAS_COLUMNS) * hint.cell_height as usize) as f32,
    )
}

/// Left-bearing correction: ink reaching left of the pen origin shifts both
/// the draw origin and the recorded advance rightward, so no glyph is clipped
/// by its left cell edge. Returns (origin shift, recorded advance).
pub fn bearing_correction(extents: &GlyphExtents) -> (f32, f32) {
    if extents.x_bearing < 0.0 {
        (-extents.x_bearing, extents.advance - extents.x_bearing)
    } else {
        (0.0, extents.advance)
    }
}

/// Draws every glyph of the working set into its cell and returns the
/// recorded advances in code-point order. Glyphs are re-measured here; all of
/// them share the one baseline offset `cell_height - ink_bottom` so mixed
/// ascender/descender rows align.
pub fn place_glyphs(surface: &mut Surface, face: &FontFace, hint: &GeometryHint)
                    -> Result<Vec<f32>, Error> {
    let glyphs = charset();
    let mut widths = Vec::with_capacity(glyphs.len());
    for (index, &symbol) in glyphs.iter().enumerate() {
        let extents = face.extents(symbol)?;
        let (shift, advance) = bearing_correction(&extents);
        let origin = cell_origin(index, hint);
        let baseline = Vector2F::new(
            origin.x() + shift,
            origin.y() + hint.cell_height as f32 - hint.ink_bottom,
        );
        surface.draw_glyph(face, symbol, baseline)?;
        widths.push(advance);
    }
    Ok(widths)
}

/// Renders one family's atlas surface and descriptor. The raster is not yet
/// written to disk; `generate` does that.
pub fn render(face: &FontFace, with_icons: bool, output_filename: &str)
              -> Result<(Surface, AtlasDescriptor), Error> {
    let extents = measure(face)?;
    let hint = GeometryHint::resolve(extents.iter().copied());
    info!(
        "{}: cell {}x{}, baseline offset {}",
        output_filename,
        hint.cell_width,
        hint.cell_height,
        hint.cell_height as f32 - hint.ink_bottom
    );

    let (width, height) = hint.surface_size();
    let mut surface = Surface::new(width, height);
    let widths = place_glyphs(&mut surface, face, &hint)?;
    if with_icons {
        icons::draw_icons(&mut surface, &hint);
    }
    swatches::draw_swatches(&mut surface);

    Ok((surface, AtlasDescriptor::new(output_filename, &hint, widths)))
}

/// Processes one configured family end to end. Any failure is fatal; nothing
/// is retried and no partial raster is written.
pub fn generate(config: &FontConfig, out_dir: &Path) -> Result<AtlasDescriptor, Error> {
    let face = FontFace::load(config.family, config.bold, POINT_SIZE)?;
    let (surface, descriptor) = render(&face, config.icons, config.output)?;
    let output_path = out_dir.join(config.output);
    surface.write_png(&output_path)?;
    info!("wrote {}", output_path.display());
    Ok(descriptor)
}
