//! Circular identicon: 19 coloured dots on a light disc.
//!
//! ```text
//! key bytes ─► blake2b-512 ─► DerivedId ─► palette + scheme + rotation ─► 19 colours
//!                                                                           │
//!                                     dot_positions(R * 3/8) ───────────────┴─► PNG / SVG
//! ```

pub mod colors;
pub mod key;
pub mod layout;
pub mod render;

pub use colors::{DOT_COUNT, FOREGROUND, dot_colors};
pub use key::{KeyEncoding, PublicKey};
pub use layout::{Circle, DotPosition, dot_positions, generate_circles};
pub use render::{render_rgba, to_png, to_svg};
