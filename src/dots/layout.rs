//! Dot positions of the circular identicon.
//!
//! Eighteen dots form two hexagonal rings (6 inner, 12 outer) around a center dot. With
//! `a` the center-to-center distance and `b = a·√3/2`:
//!
//! ```text
//!             0
//!        2         17
//!    3        1         15
//!        4         16
//!    5        18        14
//!        7         13
//!    6        10        12
//!        8         11
//!             9
//! ```
//!
//! Index 18 is always the center.

use super::colors::DOT_COUNT;
use image::Rgba;

/// A dot center relative to the icon center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPosition {
    pub x: f64,
    pub y: f64,
}

/// Unit offsets as multiples of `(b, a)`.
const OFFSETS: [(f64, f64); DOT_COUNT] = [
    (0.0, -2.0),
    (0.0, -1.0),
    (-1.0, -1.5),
    (-2.0, -1.0),
    (-1.0, -0.5),
    (-2.0, 0.0),
    (-2.0, 1.0),
    (-1.0, 0.5),
    (-1.0, 1.5),
    (0.0, 2.0),
    (0.0, 1.0),
    (1.0, 1.5),
    (2.0, 1.0),
    (1.0, 0.5),
    (2.0, 0.0),
    (2.0, -1.0),
    (1.0, -0.5),
    (1.0, -1.5),
    (0.0, 0.0),
];

/// Positions of all dots for a center-to-center `distance`.
pub fn dot_positions(distance: f64) -> [DotPosition; DOT_COUNT] {
    let a = distance;
    let b = distance * 3f64.sqrt() / 2.0;
    OFFSETS.map(|(bx, ay)| DotPosition {
        x: bx * b,
        y: ay * a,
    })
}

/// One filled dot, centered relative to the icon center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgba<u8>,
}

impl Circle {
    /// Whether `(x, y)` lies strictly inside the circle.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.x, y - self.y);
        dx * dx + dy * dy < self.radius * self.radius
    }
}

/// Pair each layout position with its colour.
pub fn generate_circles(
    distance: f64,
    radius: f64,
    colors: &[Rgba<u8>; DOT_COUNT],
) -> [Circle; DOT_COUNT] {
    let positions = dot_positions(distance);
    std::array::from_fn(|i| Circle {
        x: positions[i].x,
        y: positions[i].y,
        radius,
        color: colors[i],
    })
}
