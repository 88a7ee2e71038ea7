// generate-font-atlas/src/metrics.rs
//
// Copyright © 2026 The Font Atlas Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The glyph metrics scanner and the atlas geometry resolver.
//!
//! Measurement is the first of the two phases: every symbol in the working
//! set is measured against the face, and the measurements reduce to one
//! uniform cell size for the whole grid. Rendering re-measures per glyph but
//! positions everything with the scalars gathered here.

use crate::charset::charset;
use crate::error::Error;
use crate::{ATLAS_COLUMNS, ATLAS_ROWS};
use font_kit::family_name::FamilyName;
use font_kit::font::Font;
use font_kit::properties::{Properties, Weight};
use font_kit::source::SystemSource;

/// A loaded font resource pinned to the fixed point size.
pub struct FontFace {
    font: Font,
    point_size: f32,
}

impl FontFace {
    /// Resolves a face by family name and weight flag through the system
    /// source. Resolution failure is fatal; there is no fallback face.
    pub fn load(family: &str, bold: bool, point_size: f32) -> Result<FontFace, Error> {
        let mut properties = Properties::new();
        if bold {
            properties.weight(Weight::BOLD);
        }
        let handle = SystemSource::new()
            .select_best_match(&[FamilyName::Title(family.to_owned())], &properties)?;
        let font = handle.load()?;
        debug!("resolved {:?} to {}", family, font.full_name());
        Ok(FontFace::new(font, point_size))
    }

    #[inline]
    pub fn new(font: Font, point_size: f32) -> FontFace {
        FontFace { font, point_size }
    }

    #[inline]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Font-unit-to-surface-unit scale factor.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.point_size / self.font.metrics().units_per_em as f32
    }

    pub fn glyph_id(&self, symbol: char) -> Result<u32, Error> {
        self.font.glyph_for_char(symbol).ok_or(Error::MissingGlyph(symbol))
    }

    /// Ink box and advance for one symbol, in surface units with the y axis
    /// pointing down. Independent of any surface size.
    pub fn extents(&self, symbol: char) -> Result<GlyphExtents, Error> {
        let glyph_id = self.glyph_id(symbol)?;
        let scale = self.scale();
        let bounds = self.font.typographic_bounds(glyph_id)?;
        let advance = self.font.advance(glyph_id)?;
        Ok(GlyphExtents {
            x_bearing: bounds.min_x() * scale,
            y_bearing: -bounds.max_y() * scale,
            width: bounds.width() * scale,
            height: bounds.height() * scale,
            advance: advance.x() * scale,
        })
    }
}

/// One glyph's measurement, cairo-style: the bearings locate the ink box
/// relative to the pen origin, with `y_bearing` negative above the baseline.
/// A zero-ink glyph such as the space still carries a valid advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphExtents {
    pub x_bearing: f32,
    pub y_bearing: f32,
    pub width: f32,
    pub height: f32,
    pub advance: f32,
}

impl GlyphExtents {
    /// Lowest ink extent below the baseline (positive downward).
    #[inline]
    pub fn ink_bottom(&self) -> f32 {
        self.height + self.y_bearing
    }
}

/// The uniform grid cell derived from the full measurement set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryHint {
    /// Cell width: greatest advance, rounded up, plus a 1-unit margin.
    pub cell_width: i32,
    /// Cell height: full ink range of the measured set, rounded up.
    pub cell_height: i32,
    /// Greatest ink extent below the baseline over all glyphs.
    pub ink_bottom: f32,
    /// Least y bearing over all glyphs (topmost ink, negative).
    pub ink_top: f32,
}

impl GeometryHint {
    /// Reduces the measurement set to one cell size. Zero-ink glyphs are not
    /// skipped: their advances still bound the cell width.
    pub fn resolve<I>(extents: I) -> GeometryHint
    where
        I: IntoIterator<Item = GlyphExtents>,
    {
        let mut cell_width = 0;
        let mut ink_bottom = 0.0f32;
        let mut ink_top = 0.0f32;
        for glyph in extents {
            cell_width = cell_width.max(glyph.advance.ceil() as i32 + 1);
            ink_bottom = ink_bottom.max(glyph.ink_bottom());
            ink_top = ink_top.min(glyph.y_bearing);
        }
        GeometryHint {
            cell_width,
            cell_height: (ink_bottom - ink_top).ceil() as i32,
            ink_bottom,
            ink_top,
        }
    }

    /// Final surface size: 16 columns by the full 8-row budget.
    #[inline]
    pub fn surface_size(&self) -> (i32, i32) {
        (
            self.cell_width * ATLAS_COLUMNS as i32,
            self.cell_height * ATLAS_ROWS as i32,
        )
    }
}

/// Measures the whole working set against a face, in code-point order.
pub fn measure(face: &FontFace) -> Result<Vec<GlyphExtents>, Error> {
    charset().into_iter().map(|symbol| face.extents(symbol)).collect()
}

#[cfg(test)]
pub(crate) fn monospace_face() -> Option<FontFace> {
    use crate::POINT_SIZE;
    let handle = SystemSource::new()
        .select_best_match(&[FamilyName::Monospace], &Properties::new())
        .ok()?;
    let font = handle.load().ok()?;
    Some(FontFace::new(font, POINT_SIZE))
}

#[cfg(test)]
mod test {
    use crate::metrics::{measure, monospace_face, GeometryHint, GlyphExtents};
    use crate::charset::CHARSET_LEN;

    fn boxed(x_bearing: f32, y_bearing: f32, width: f32, height: f32, advance: f32)
             -> GlyphExtents {
        GlyphExtents { x_bearing, y_bearing, width, height, advance }
    }

    #[test]
    fn test_cell_width_is_max_advance_plus_margin() {
        let hint = GeometryHint::resolve(vec![
            boxed(1.0, -30.0, 20.0, 30.0, 22.5),
            boxed(0.0, -28.0, 18.0, 28.0, 19.0),
        ]);
        assert_eq!(hint.cell_width, 24);
    }

    #[test]
    fn test_cell_height_spans_ascenders_and_descenders() {
        // One glyph all above the baseline, one dipping 12 units below.
        let hint = GeometryHint::resolve(vec![
            boxed(0.0, -35.0, 10.0, 35.0, 12.0),
            boxed(0.0, -20.0, 10.0, 32.0, 12.0),
        ]);
        assert_eq!(hint.ink_bottom, 12.0);
        assert_eq!(hint.ink_top, -35.0);
        assert_eq!(hint.cell_height, 47);
    }

    #[test]
    fn test_zero_ink_glyph_still_bounds_cell_width() {
        // A space has no ink but the widest advance of the set.
        let hint = GeometryHint::resolve(vec![
            boxed(0.0, 0.0, 0.0, 0.0, 40.0),
            boxed(1.0, -30.0, 20.0, 30.0, 21.0),
        ]);
        assert_eq!(hint.cell_width, 41);
    }

    #[test]
    fn test_surface_size() {
        let hint = GeometryHint {
            cell_width: 27,
            cell_height: 61,
            ink_bottom: 12.0,
            ink_top: -48.5,
        };
        assert_eq!(hint.surface_size(), (27 * 16, 61 * 8));
    }

    #[test]
    fn test_measure_system_face() {
        let face = match monospace_face() {
            Some(face) => face,
            None => return,
        };
        if face.extents(crate::charset::PLACEHOLDER).is_err() {
            return;
        }
        let extents = measure(&face).unwrap();
        assert_eq!(extents.len(), CHARSET_LEN);

        let hint = GeometryHint::resolve(extents.iter().copied());
        assert!(hint.cell_width > 0);
        assert!(hint.cell_height > 0);
        // No glyph's advance exceeds its own cell.
        for glyph in &extents {
            assert!(glyph.advance <= hint.cell_width as f32);
        }
    }

    #[test]
    fn test_measure_is_deterministic() {
        let face = match monospace_face() {
            Some(face) => face,
            None => return,
        };
        if face.extents(crate::charset::PLACEHOLDER).is_err() {
            return;
        }
        let first = measure(&face).unwrap();
        let second = measure(&face).unwrap();
        assert_eq!(first, second);
    }
}
