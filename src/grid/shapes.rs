//! Shape catalog.
//!
//! Every shape draws itself into a square cell of side `cell` through
//! [`Graphics`], which applies placement and rotation. Some shapes use the
//! position index of the cell within its render pass.
//!
//! | Catalog | Count | Used by           |
//! |---------|-------|-------------------|
//! | center  | 14    | inner 2x2 block   |
//! | outer   | 4     | sides and corners |

use super::graphics::{Graphics, Point, Renderer};

#[inline]
fn floor(v: f32) -> f32 {
    v.floor()
}

// ============================================================================
// Center shapes
// ============================================================================

/// Shapes for the four center cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterShape {
    CutCorner,
    SideTriangle,
    InsetSquare,
    OffsetSquare,
    Dot,
    FramedTriangle,
    Arrow,
    CornerTriangle,
    Stair,
    FramedSquare,
    FramedCircle,
    CornerTriangleAlt,
    FramedRhombus,
    BigCircle,
}

impl CenterShape {
    pub const ALL: [Self; 14] = [
        Self::CutCorner,
        Self::SideTriangle,
        Self::InsetSquare,
        Self::OffsetSquare,
        Self::Dot,
        Self::FramedTriangle,
        Self::Arrow,
        Self::CornerTriangle,
        Self::Stair,
        Self::FramedSquare,
        Self::FramedCircle,
        Self::CornerTriangleAlt,
        Self::FramedRhombus,
        Self::BigCircle,
    ];

    /// Pick a shape from a hash nibble.
    #[inline]
    pub fn from_nibble(nibble: u8) -> Self {
        Self::ALL[nibble as usize % Self::ALL.len()]
    }

    pub fn draw<R: Renderer>(self, g: &mut Graphics<'_, R>, cell: f32, index: Option<usize>) {
        let c = cell;
        match self {
            Self::CutCorner => {
                let k = c * 0.42;
                g.add_polygon(
                    &[
                        Point::new(0.0, 0.0),
                        Point::new(c, 0.0),
                        Point::new(c, c - k * 2.0),
                        Point::new(c - k, c),
                        Point::new(0.0, c),
                    ],
                    false,
                );
            }
            Self::SideTriangle => {
                let w = floor(c * 0.5);
                let h = floor(c * 0.8);
                g.add_triangle(c - w, 0.0, w, h, 2.0, false);
            }
            Self::InsetSquare => {
                let s = floor(c / 3.0);
                g.add_rectangle(s, s, c - s, c - s, false);
            }
            Self::OffsetSquare => {
                let inner = c * 0.1;
                let inner = if inner > 1.0 {
                    floor(inner)
                } else if inner > 0.5 {
                    1.0
                } else {
                    inner
                };
                let outer = if c < 6.0 {
                    1.0
                } else if c < 8.0 {
                    2.0
                } else {
                    floor(c * 0.25)
                };
                let side = c - inner - outer;
                g.add_rectangle(outer, outer, side, side, false);
            }
            Self::Dot => {
                let m = floor(c * 0.15);
                let s = floor(c * 0.5);
                g.add_circle(c - s - m, c - s - m, s, false);
            }
            Self::FramedTriangle => {
                let inner = c * 0.1;
                let outer = inner * 4.0;
                g.add_rectangle(0.0, 0.0, c, c, false);
                g.add_polygon(
                    &[
                        Point::new(outer, floor(outer)),
                        Point::new(c - inner, floor(outer)),
                        Point::new(outer + (c - outer - inner) / 2.0, c - inner),
                    ],
                    true,
                );
            }
            Self::Arrow => {
                g.add_polygon(
                    &[
                        Point::new(0.0, 0.0),
                        Point::new(c, 0.0),
                        Point::new(c, c * 0.7),
                        Point::new(c * 0.4, c * 0.4),
                        Point::new(c * 0.7, c),
                        Point::new(0.0, c),
                    ],
                    false,
                );
            }
            Self::CornerTriangle | Self::CornerTriangleAlt => {
                let h = c / 2.0;
                g.add_triangle(h, h, h, h, 3.0, false);
            }
            Self::Stair => {
                let h = c / 2.0;
                g.add_rectangle(0.0, 0.0, c, h, false);
                g.add_rectangle(0.0, h, h, h, false);
                g.add_triangle(h, h, h, h, 1.0, false);
            }
            Self::FramedSquare => {
                let inner = c * 0.14;
                let inner = if c < 8.0 { inner } else { floor(inner) };
                let outer = if c < 4.0 {
                    1.0
                } else if c < 6.0 {
                    2.0
                } else {
                    floor(c * 0.35)
                };
                let side = c - outer - inner;
                g.add_rectangle(0.0, 0.0, c, c, false);
                g.add_rectangle(outer, outer, side, side, true);
            }
            Self::FramedCircle => {
                let inner = c * 0.12;
                let outer = inner * 3.0;
                g.add_rectangle(0.0, 0.0, c, c, false);
                g.add_circle(outer, outer, c - inner - outer, true);
            }
            Self::FramedRhombus => {
                let m = c * 0.25;
                g.add_rectangle(0.0, 0.0, c, c, false);
                g.add_rhombus(m, m, c - m, c - m, true);
            }
            Self::BigCircle => {
                // Spans the whole center block; drawn from the first cell only.
                if matches!(index, None | Some(0)) {
                    let m = c * 0.4;
                    g.add_circle(m, m, c * 1.2, false);
                }
            }
        }
    }
}

// ============================================================================
// Outer shapes
// ============================================================================

/// Shapes for the side and corner cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterShape {
    Triangle,
    HalfTriangle,
    Rhombus,
    Circle,
}

impl OuterShape {
    pub const ALL: [Self; 4] = [Self::Triangle, Self::HalfTriangle, Self::Rhombus, Self::Circle];

    #[inline]
    pub fn from_nibble(nibble: u8) -> Self {
        Self::ALL[nibble as usize % Self::ALL.len()]
    }

    pub fn draw<R: Renderer>(self, g: &mut Graphics<'_, R>, cell: f32, _index: Option<usize>) {
        let c = cell;
        match self {
            Self::Triangle => g.add_triangle(0.0, 0.0, c, c, 0.0, false),
            Self::HalfTriangle => g.add_triangle(0.0, c / 2.0, c, c / 2.0, 0.0, false),
            Self::Rhombus => g.add_rhombus(0.0, 0.0, c, c, false),
            Self::Circle => {
                let m = c / 6.0;
                g.add_circle(m, m, c - 2.0 * m, false);
            }
        }
    }
}

/// Either catalog, as selected by a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Center(CenterShape),
    Outer(OuterShape),
}

impl Shape {
    pub fn draw<R: Renderer>(self, g: &mut Graphics<'_, R>, cell: f32, index: Option<usize>) {
        match self {
            Self::Center(shape) => shape.draw(g, cell, index),
            Self::Outer(shape) => shape.draw(g, cell, index),
        }
    }
}
