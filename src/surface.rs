// generate-font-atlas/src/surface.rs
//
// Copyright © 2026 The Font Atlas Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The seam to the external rasterization capability.
//!
//! Everything is drawn white on transparent into a CPU raster target; the
//! alpha channel is the atlas, written out as an 8-bit grayscale PNG. Glyphs
//! go through the face's outline, scaled from font units and flipped to the
//! y-down surface.

use crate::error::Error;
use crate::metrics::FontFace;
use font_kit::hinting::HintingOptions;
use font_kit::outline::OutlineSink;
use pathfinder_geometry::line_segment::LineSegment2F;
use pathfinder_geometry::vector::Vector2F;
use raqote::{DrawOptions, DrawTarget, LineCap, Path, PathBuilder, SolidSource, Source};
use raqote::StrokeStyle;
use std::path;

/// Full-coverage source; only the alpha channel survives into the output.
const COVERAGE_WHITE: SolidSource = SolidSource {
    r: 0xff,
    g: 0xff,
    b: 0xff,
    a: 0xff,
};

pub struct Surface {
    target: DrawTarget,
}

impl Surface {
    #[inline]
    pub fn new(width: i32, height: i32) -> Surface {
        Surface { target: DrawTarget::new(width, height) }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.target.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.target.height()
    }

    pub fn fill(&mut self, path: &Path) {
        self.target.fill(path, &Source::Solid(COVERAGE_WHITE), &DrawOptions::new());
    }

    pub fn stroke(&mut self, path: &Path, width: f32, cap: LineCap) {
        let style = StrokeStyle { width, cap, ..StrokeStyle::default() };
        self.target.stroke(path, &Source::Solid(COVERAGE_WHITE), &style, &DrawOptions::new());
    }

    /// Fills one glyph with its pen origin at `baseline`.
    pub fn draw_glyph(&mut self, face: &FontFace, symbol: char, baseline: Vector2F)
                      -> Result<(), Error> {
        let glyph_id = face.glyph_id(symbol)?;
        let mut sink = GlyphPathSink::new(baseline, face.scale());
        face.font().outline(glyph_id, HintingOptions::None, &mut sink)?;
        let path = sink.finish();
        self.fill(&path);
        Ok(())
    }

    /// One alpha byte per pixel, row-major.
    pub fn alpha_pixels(&self) -> Vec<u8> {
        self.target
            .get_data()
            .iter()
            .map(|&pixel| (pixel >> 24) as u8)
            .collect()
    }

    /// Writes the alpha channel as a single-channel PNG.
    pub fn write_png(&self, output_path: &path::Path) -> Result<(), Error> {
        image::save_buffer(
            output_path,
            &self.alpha_pixels(),
            self.width() as u32,
            self.height() as u32,
            image::ColorType::L8,
        )?;
        Ok(())
    }
}

/// Builds a raster path from a font outline, mapping font units (y up) to
/// surface units (y down) about the glyph's baseline origin.
struct GlyphPathSink {
    builder: PathBuilder,
    origin: Vector2F,
    scale: f32,
}

impl GlyphPathSink {
    fn new(origin: Vector2F, scale: f32) -> GlyphPathSink {
        GlyphPathSink {
            builder: PathBuilder::new(),
            origin,
            scale,
        }
    }

    #[inline]
    fn convert_point(&self, point: Vector2F) -> Vector2F {
        Vector2F::new(
            self.origin.x() + point.x() * self.scale,
            self.origin.y() - point.y() * self.scale,
        )
    }

    fn finish(self) -> Path {
        self.builder.finish()
    }
}

impl OutlineSink for GlyphPathSink {
    fn move_to(&mut self, to: Vector2F) {
        let to = self.convert_point(to);
        self.builder.move_to(to.x(), to.y());
    }

    fn line_to(&mut self, to: Vector2F) {
        let to = self.convert_point(to);
        self.builder.line_to(to.x(), to.y());
    }

    fn quadratic_curve_to(&mut self, ctrl: Vector2F, to: Vector2F) {
        let (ctrl, to) = (self.convert_point(ctrl), self.convert_point(to));
        self.builder.quad_to(ctrl.x(), ctrl.y(), to.x(), to.y());
    }

    fn cubic_curve_to(&mut self, ctrl: LineSegment2F, to: Vector2F) {
        let (ctrl0, ctrl1) = (self.convert_point(ctrl.from()), self.convert_point(ctrl.to()));
        let to = self.convert_point(to);
        self.builder.cubic_to(ctrl0.x(), ctrl0.y(), ctrl1.x(), ctrl1.y(), to.x(), to.y());
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

#[cfg(test)]
mod test {
    use crate::metrics::monospace_face;
    use crate::surface::Surface;
    use pathfinder_geometry::vector::Vector2F;
    use raqote::PathBuilder;

    #[test]
    fn test_new_surface_is_blank() {
        let surface = Surface::new(8, 8);
        assert!(surface.alpha_pixels().iter().all(|&alpha| alpha == 0));
    }

    #[test]
    fn test_fill_marks_alpha() {
        let mut surface = Surface::new(8, 8);
        let mut builder = PathBuilder::new();
        builder.rect(2.0, 2.0, 4.0, 4.0);
        surface.fill(&builder.finish());
        let pixels = surface.alpha_pixels();
        assert_eq!(pixels[4 * 8 + 4], 0xff);
        assert_eq!(pixels[0], 0);
    }

    #[test]
    fn test_draw_glyph_leaves_ink() {
        let face = match monospace_face() {
            Some(face) => face,
            None => return,
        };
        let mut surface = Surface::new(64, 96);
        surface.draw_glyph(&face, 'M', Vector2F::new(4.0, 70.0)).unwrap();
        assert!(surface.alpha_pixels().iter().any(|&alpha| alpha != 0));
    }
}
