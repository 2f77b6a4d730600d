//! Grid identicon: a symmetric 4x4 arrangement of shapes rendered as SVG.
//!
//! ```text
//! seed ─► hash::normalize ─► Palette + colour slots ─► 3 render passes ─► SvgRenderer ─► <svg>
//! ```

pub mod color;
pub mod generator;
pub mod graphics;
pub mod shapes;
pub mod svg;

pub use color::{LightnessRange, Palette};
pub use generator::{GridStyle, IconGenerator, to_svg_with_style};
pub use graphics::{Graphics, Point, Renderer, Transform};
pub use svg::{Background, SvgRenderer};
