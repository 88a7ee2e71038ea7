// generate-font-atlas/src/icons.rs
//
// Copyright © 2026 The Font Atlas Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The fixed icon inventory of the monospaced atlas.
//!
//! Each icon is a declarative table entry: a unit basis derived from the cell
//! size, an anchor offset, and one or more fill/stroke passes of path ops
//! whose operands are multiples of that basis. Rendered geometry is a pure
//! function of the cell anchor and (W, H); no drawing-context transform state
//! is involved.

use crate::metrics::GeometryHint;
use crate::surface::Surface;
use pathfinder_geometry::vector::Vector2F;
use raqote::{LineCap, Path, PathBuilder};
use std::f32::consts::PI;

/// One path segment. Operands are multiples of the icon's unit basis.
#[derive(Clone, Copy, Debug)]
pub enum PathOp {
    Move(f32, f32),
    Line(f32, f32),
    Curve(f32, f32, f32, f32, f32, f32),
    /// Circular arc about (cx, cy); `start` and `sweep` in radians, sweeping
    /// clockwise on the y-down surface.
    Arc { cx: f32, cy: f32, r: f32, start: f32, sweep: f32 },
    Close,
}

/// How an icon's abstract units map to surface units.
#[derive(Clone, Copy, Debug)]
pub enum UnitBasis {
    /// x scaled by the cell width, y by the cell height.
    Cell { x: f32, y: f32 },
    /// Both axes scaled by the cell width, keeping the icon square-ish no
    /// matter what the font metrics produced for H.
    CellWidth { x: f32, y: f32 },
    /// Uniform unit: the smaller of the two cell-relative extents.
    MinExtent { x: f32, y: f32 },
}

#[derive(Clone, Copy, Debug)]
pub enum PassStyle {
    Fill,
    Stroke { width: f32, cap: LineCap },
    FillStroke { width: f32, cap: LineCap },
}

pub struct IconPass {
    pub style: PassStyle,
    pub ops: &'static [PathOp],
}

pub struct Icon {
    pub name: &'static str,
    /// Anchor adjustment in unit multiples, applied to the cell center.
    pub offset: (f32, f32),
    pub unit: UnitBasis,
    pub passes: &'static [IconPass],
}

const STROKE_THIN: f32 = 3.0;
const STROKE_LOOP: f32 = 5.0;

// Arc start point for the loop icon: (cos -0.2, sin -0.2).
const LOOP_START_X: f32 = 0.98006658;
const LOOP_START_Y: f32 = -0.19866933;

pub const ICONS: &[Icon] = &[
    Icon {
        name: "play",
        offset: (0.0, 0.0),
        unit: UnitBasis::Cell { x: 0.4, y: 0.3 },
        passes: &[IconPass {
            style: PassStyle::Fill,
            ops: &[
                PathOp::Move(-1.0, -1.0),
                PathOp::Line(1.0, 0.0),
                PathOp::Line(-1.0, 1.0),
                PathOp::Close,
            ],
        }],
    },
    Icon {
        name: "stop",
        offset: (0.0, 0.0),
        unit: UnitBasis::Cell { x: 0.4, y: 0.3 },
        passes: &[IconPass {
            style: PassStyle::Fill,
            ops: &[
                PathOp::Move(-1.0, -1.0),
                PathOp::Line(1.0, -1.0),
                PathOp::Line(1.0, 1.0),
                PathOp::Line(-1.0, 1.0),
                PathOp::Close,
            ],
        }],
    },
    Icon {
        name: "pause",
        offset: (0.0, 0.0),
        unit: UnitBasis::Cell { x: 0.4, y: 0.3 },
        passes: &[IconPass {
            style: PassStyle::Fill,
            // Two bars, each a third of the half-extent wide, at ±2/3.
            ops: &[
                PathOp::Move(-1.0, -1.0),
                PathOp::Line(-1.0 / 3.0, -1.0),
                PathOp::Line(-1.0 / 3.0, 1.0),
                PathOp::Line(-1.0, 1.0),
                PathOp::Close,
                PathOp::Move(1.0 / 3.0, -1.0),
                PathOp::Line(1.0, -1.0),
                PathOp::Line(1.0, 1.0),
                PathOp::Line(1.0 / 3.0, 1.0),
                PathOp::Close,
            ],
        }],
    },
    Icon {
        name: "loop",
        offset: (0.0, 0.0),
        unit: UnitBasis::MinExtent { x: 0.4, y: 0.3 },
        passes: &[
            IconPass {
                style: PassStyle::Stroke { width: STROKE_LOOP, cap: LineCap::Round },
                ops: &[
                    PathOp::Move(LOOP_START_X, LOOP_START_Y),
                    PathOp::Arc {
                        cx: 0.0,
                        cy: 0.0,
                        r: 1.0,
                        start: -0.2,
                        sweep: 1.5 * PI + 0.2,
                    },
                ],
            },
            // Arrowhead at the arc terminus (the top of the circle): a
            // 0.7-radius triangle, pre-rotated to point along the sweep.
            IconPass {
                style: PassStyle::Fill,
                ops: &[
                    PathOp::Move(-0.14, -0.3),
                    PathOp::Line(0.84, -1.0),
                    PathOp::Line(-0.14, -1.7),
                    PathOp::Close,
                ],
            },
        ],
    },
    Icon {
        name: "noise",
        offset: (0.0, 0.0),
        unit: UnitBasis::Cell { x: 0.45, y: 0.35 },
        passes: &[IconPass {
            style: PassStyle::Stroke { width: STROKE_THIN, cap: LineCap::Round },
            ops: &[
                PathOp::Move(-1.0, 0.0),
                PathOp::Line(-5.0 / 6.0, 0.068653),
                PathOp::Line(-4.0 / 6.0, 0.113797),
                PathOp::Line(-3.0 / 6.0, 0.409866),
                PathOp::Line(-2.0 / 6.0, -0.18389),
                PathOp::Line(-1.0 / 6.0, 0.120536),
                PathOp::Line(0.0, 0.079325),
                PathOp::Line(1.0 / 6.0, -0.43385),
                PathOp::Line(2.0 / 6.0, 0.249644),
                PathOp::Line(3.0 / 6.0, 0.033439),
                PathOp::Line(4.0 / 6.0, 0.464872),
                PathOp::Line(5.0 / 6.0, 0.154274),
                PathOp::Line(1.0, 0.0),
            ],
        }],
    },
    Icon {
        name: "pulse",
        offset: (0.0, 0.0),
        unit: UnitBasis::Cell { x: 0.45, y: 0.25 },
        passes: &[IconPass {
            style: PassStyle::Stroke { width: STROKE_THIN, cap: LineCap::Round },
            ops: &[
                PathOp::Move(-1.0, 1.0),
                PathOp::Line(-1.0, -1.0),
                PathOp::Line(0.0, -1.0),
                PathOp::Line(0.0, 1.0),
                PathOp::Line(1.0, 1.0),
            ],
        }],
    },
    Icon {
        name: "saw",
        offset: (0.0, 0.0),
        unit: UnitBasis::Cell { x: 0.45, y: 0.25 },
        passes: &[IconPass {
            style: PassStyle::Stroke { width: STROKE_THIN, cap: LineCap::Round },
            ops: &[
                PathOp::Move(-1.0, 1.0),
                PathOp::Line(1.0, -1.0),
                PathOp::Line(1.0, 1.0),
            ],
        }],
    },
    Icon {
        name: "tri",
        offset: (0.0, 0.0),
        unit: UnitBasis::Cell { x: 0.45, y: 0.25 },
        passes: &[IconPass {
            style: PassStyle::Stroke { width: STROKE_THIN, cap: LineCap::Round },
            ops: &[
                PathOp::Move(-1.0, 1.0),
                PathOp::Line(0.0, -1.0),
                PathOp::Line(1.0, 1.0),
            ],
        }],
    },
    Icon {
        name: "low",
        offset: (0.0, 0.0),
        unit: UnitBasis::Cell { x: 0.45, y: 0.25 },
        passes: &[IconPass {
            style: PassStyle::Stroke { width: STROKE_THIN, cap: LineCap::Round },
            ops: &[
                PathOp::Move(-1.0, -1.0),
                PathOp::Line(-0.7, -1.0),
                PathOp::Curve(0.3, -1.0, 0.3, 0.0, 0.3, 1.0),
                PathOp::Line(1.0, 1.0),
            ],
        }],
    },
    Icon {
        name: "band",
        offset: (0.0, 0.0),
        unit: UnitBasis::Cell { x: 0.45, y: 0.25 },
        passes: &[IconPass {
            style: PassStyle::Stroke { width: STROKE_THIN, cap: LineCap::Round },
            ops: &[
                PathOp::Move(-1.0, 1.0),
                PathOp::Line(-0.7, 1.0),
                PathOp::Curve(-0.7, -1.0, -0.2, -1.0, 0.0, -1.0),
                PathOp::Curve(0.2, -1.0, 0.7, -1.0, 0.7, 1.0),
                PathOp::Line(1.0, 1.0),
            ],
        }],
    },
    Icon {
        name: "high",
        offset: (0.0, 0.0),
        unit: UnitBasis::Cell { x: 0.45, y: 0.25 },
        passes: &[IconPass {
            style: PassStyle::Stroke { width: STROKE_THIN, cap: LineCap::Round },
            ops: &[
                PathOp::Move(1.0, -1.0),
                PathOp::Line(0.7, -1.0),
                PathOp::Curve(-0.3, -1.0, -0.3, 0.0, -0.3, 1.0),
                PathOp::Line(-1.0, 1.0),
            ],
        }],
    },
    Icon {
        name: "arrow-left",
        offset: (-1.0 / 3.0, 0.0),
        unit: UnitBasis::Cell { x: 0.25, y: 0.25 },
        passes: &[IconPass {
            style: PassStyle::Fill,
            ops: &[
                PathOp::Move(1.0, -1.0),
                PathOp::Line(-1.0, 0.0),
                PathOp::Line(1.0, 1.0),
                PathOp::Close,
            ],
        }],
    },
    Icon {
        name: "arrow-right",
        offset: (1.0 / 3.0, 0.0),
        unit: UnitBasis::Cell { x: 0.25, y: 0.25 },
        passes: &[IconPass {
            style: PassStyle::Fill,
            ops: &[
                PathOp::Move(-1.0, -1.0),
                PathOp::Line(1.0, 0.0),
                PathOp::Line(-1.0, 1.0),
                PathOp::Close,
            ],
        }],
    },
    Icon {
        name: "copy",
        offset: (-2.0, -2.0),
        unit: UnitBasis::CellWidth { x: 0.225, y: 0.3 },
        passes: &[
            IconPass {
                style: PassStyle::Stroke { width: STROKE_THIN, cap: LineCap::Butt },
                ops: BACK_DOCUMENT_OPS,
            },
            IconPass {
                style: PassStyle::Stroke { width: STROKE_THIN, cap: LineCap::Butt },
                ops: FRONT_DOCUMENT_OPS,
            },
        ],
    },
    Icon {
        name: "paste",
        offset: (-2.0, -2.0),
        unit: UnitBasis::CellWidth { x: 0.225, y: 0.3 },
        passes: &[
            IconPass {
                style: PassStyle::Stroke { width: STROKE_THIN, cap: LineCap::Butt },
                ops: BACK_DOCUMENT_OPS,
            },
            IconPass {
                style: PassStyle::FillStroke { width: STROKE_THIN, cap: LineCap::Butt },
                ops: FRONT_DOCUMENT_OPS,
            },
        ],
    },
];

// The two overlapping document outlines of the copy/paste icons, on an
// 8-unit grid about the icon origin.
const BACK_DOCUMENT_OPS: &[PathOp] = &[
    PathOp::Move(3.0, 1.0),
    PathOp::Line(3.0, 0.0),
    PathOp::Line(0.0, 0.0),
    PathOp::Line(0.0, 3.0),
    PathOp::Line(1.0, 3.0),
];

const FRONT_DOCUMENT_OPS: &[PathOp] = &[
    PathOp::Move(1.0, 1.0),
    PathOp::Line(4.0, 1.0),
    PathOp::Line(4.0, 4.0),
    PathOp::Line(1.0, 4.0),
    PathOp::Close,
];

/// Draws the whole inventory into consecutive cells of grid row 1, starting
/// at column 0, each anchored at its cell center.
pub fn draw_icons(surface: &mut Surface, hint: &GeometryHint) {
    let cell_width = hint.cell_width as f32;
    let cell_height = hint.cell_height as f32;
    for (index, icon) in ICONS.iter().enumerate() {
        let anchor = Vector2F::new((index as f32 + 0.5) * cell_width, 1.5 * cell_height);
        debug!("icon {:?} at {:?}", icon.name, anchor);
        draw_icon(surface, icon, anchor, cell_width, cell_height);
    }
}

fn draw_icon(surface: &mut Surface, icon: &Icon, anchor: Vector2F, cell_width: f32,
             cell_height: f32) {
    let (unit_x, unit_y) = resolve_unit(icon.unit, cell_width, cell_height);
    let origin = anchor + Vector2F::new(icon.offset.0 * unit_x, icon.offset.1 * unit_y);
    for pass in icon.passes {
        let path = build_path(pass.ops, origin, unit_x, unit_y);
        match pass.style {
            PassStyle::Fill => surface.fill(&path),
            PassStyle::Stroke { width, cap } => surface.stroke(&path, width, cap),
            PassStyle::FillStroke { width, cap } => {
                surface.fill(&path);
                surface.stroke(&path, width, cap);
            }
        }
    }
}

fn resolve_unit(unit: UnitBasis, cell_width: f32, cell_height: f32) -> (f32, f32) {
    match unit {
        UnitBasis::Cell { x, y } => (x * cell_width, y * cell_height),
        UnitBasis::CellWidth { x, y } => (x * cell_width, y * cell_width),
        UnitBasis::MinExtent { x, y } => {
            let unit = (x * cell_width).min(y * cell_height);
            (unit, unit)
        }
    }
}

fn build_path(ops: &[PathOp], origin: Vector2F, unit_x: f32, unit_y: f32) -> Path {
    let mut builder = PathBuilder::new();
    for op in ops {
        match *op {
            PathOp::Move(x, y) => {
                builder.move_to(origin.x() + x * unit_x, origin.y() + y * unit_y);
            }
            PathOp::Line(x, y) => {
                builder.line_to(origin.x() + x * unit_x, origin.y() + y * unit_y);
            }
            PathOp::Curve(x0, y0, x1, y1, x, y) => {
                builder.cubic_to(
                    origin.x() + x0 * unit_x,
                    origin.y() + y0 * unit_y,
                    origin.x() + x1 * unit_x,
                    origin.y() + y1 * unit_y,
                    origin.x() + x * unit_x,
                    origin.y() + y * unit_y,
                );
            }
            PathOp::Arc { cx, cy, r, start, sweep } => {
                builder.arc(
                    origin.x() + cx * unit_x,
                    origin.y() + cy * unit_y,
                    r * unit_x,
                    start,
                    sweep,
                );
            }
            PathOp::Close => builder.close(),
        }
    }
    builder.finish()
}

#[cfg(test)]
mod test {
    use crate::icons::{draw_icons, resolve_unit, Icon, PathOp, ICONS};
    use crate::metrics::GeometryHint;
    use crate::surface::Surface;
    use crate::ATLAS_COLUMNS;

    const NAMES: [&str; 15] = [
        "play", "stop", "pause", "loop", "noise", "pulse", "saw", "tri", "low", "band",
        "high", "arrow-left", "arrow-right", "copy", "paste",
    ];

    fn test_hint() -> GeometryHint {
        GeometryHint {
            cell_width: 30,
            cell_height: 60,
            ink_bottom: 12.0,
            ink_top: -47.5,
        }
    }

    #[test]
    fn test_inventory_names_and_order() {
        assert_eq!(ICONS.len(), NAMES.len());
        for (icon, &name) in ICONS.iter().zip(NAMES.iter()) {
            assert_eq!(icon.name, name);
        }
    }

    #[test]
    fn test_inventory_fits_one_row() {
        assert!(ICONS.len() <= ATLAS_COLUMNS);
    }

    // Worst-case horizontal distance from the anchor, in unit multiples.
    fn horizontal_reach(icon: &Icon) -> f32 {
        let mut reach = 0.0f32;
        for pass in icon.passes {
            for op in pass.ops {
                let xs: Vec<f32> = match *op {
                    PathOp::Move(x, _) | PathOp::Line(x, _) => vec![x],
                    PathOp::Curve(x0, _, x1, _, x, _) => vec![x0, x1, x],
                    PathOp::Arc { cx, r, .. } => vec![cx - r, cx + r],
                    PathOp::Close => vec![],
                };
                for x in xs {
                    reach = reach.max((x + icon.offset.0).abs());
                }
            }
        }
        reach
    }

    #[test]
    fn test_icons_stay_within_cell_reach() {
        let hint = test_hint();
        let cell_width = hint.cell_width as f32;
        let cell_height = hint.cell_height as f32;
        for icon in ICONS {
            let (unit_x, _) = resolve_unit(icon.unit, cell_width, cell_height);
            let reach = horizontal_reach(icon) * unit_x;
            assert!(
                reach <= 0.45 * cell_width + 1e-3,
                "{} reaches {} of cell width {}",
                icon.name,
                reach,
                cell_width
            );
        }
    }

    #[test]
    fn test_every_icon_cell_gets_ink() {
        let hint = test_hint();
        let (width, height) = hint.surface_size();
        let mut surface = Surface::new(width, height);
        draw_icons(&mut surface, &hint);
        let pixels = surface.alpha_pixels();

        let cell_width = hint.cell_width as usize;
        let cell_height = hint.cell_height as usize;
        for (index, icon) in ICONS.iter().enumerate() {
            let x0 = index * cell_width;
            let y0 = cell_height;
            let mut inked = false;
            for y in y0..y0 + cell_height {
                for x in x0..x0 + cell_width {
                    if pixels[y * width as usize + x] != 0 {
                        inked = true;
                    }
                }
            }
            assert!(inked, "icon {} left no ink in its cell", icon.name);
        }
    }

    #[test]
    fn test_icon_raster_is_deterministic() {
        let hint = test_hint();
        let (width, height) = hint.surface_size();
        let mut first = Surface::new(width, height);
        draw_icons(&mut first, &hint);
        let mut second = Surface::new(width, height);
        draw_icons(&mut second, &hint);
        assert_eq!(first.alpha_pixels(), second.alpha_pixels());
    }
}
