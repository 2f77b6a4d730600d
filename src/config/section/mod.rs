//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sigil.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `grid`   | `[grid]`     | Grid identicon size and style            |
//! | `dots`   | `[dots]`     | Circular identicon size and format       |
//! | `output` | `[output]`   | Batch output directory and manifest      |

mod dots;
mod grid;
mod output;

pub use dots::DotsSection;
pub use grid::GridSection;
pub use output::OutputSection;
