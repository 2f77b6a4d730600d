//! Sigil - deterministic identicons.
//!
//! Two independent pipelines turn an input into a small picture that is always
//! the same for the same input:
//!
//! | Variant | Input                   | Output    | Module   |
//! |---------|-------------------------|-----------|----------|
//! | Grid    | any string or hex hash  | SVG       | [`grid`] |
//! | Dots    | public key bytes        | PNG / SVG | [`dots`] |
//!
//! # Example
//!
//! ```no_run
//! let svg = sigil::grid_identicon_to_svg("Alice", 64, None)?;
//!
//! let key = sigil::PublicKey::parse("FHNpKmJrUtusuvKPGomAygQqeiks98bdV6yD61Stb6vg")?;
//! let png = sigil::circular_identicon_png(&key, 64)?;
//! # Ok::<(), sigil::IconError>(())
//! ```
//!
//! Rendering is pure. Only [`cache`], [`batch`] and the binary log anything.

pub mod logger;

pub mod batch;
pub mod cache;
pub mod config;
pub mod dots;
pub mod error;
pub mod grid;
pub mod hash;
pub mod kind;
pub mod utils;

pub use dots::{KeyEncoding, PublicKey};
pub use error::{IconError, MAX_SIZE, Result};
pub use grid::GridStyle;
pub use kind::{DotsFormat, IconKind};

/// Grid identicon as an SVG document.
///
/// `padding` is a fraction of `size` left empty on each side and defaults to 0.
pub fn grid_identicon_to_svg(hash_or_seed: &str, size: u32, padding: Option<f32>) -> Result<String> {
    let style = GridStyle::default().with_padding(padding.unwrap_or(0.0));
    grid::to_svg_with_style(hash_or_seed, size, &style)
}

/// Circular identicon encoded as PNG.
pub fn circular_identicon_png(key: &PublicKey, size: u32) -> Result<Vec<u8>> {
    dots::to_png(key, size)
}

/// Circular identicon as an SVG document.
pub fn circular_identicon_svg(key: &PublicKey, size: u32) -> Result<String> {
    dots::to_svg(key, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_default_padding_is_zero() {
        let explicit = grid::to_svg_with_style("Bob", 64, &GridStyle::default()).unwrap();
        assert_eq!(grid_identicon_to_svg("Bob", 64, None).unwrap(), explicit);
        assert_eq!(grid_identicon_to_svg("Bob", 64, Some(0.0)).unwrap(), explicit);
    }

    #[test]
    fn test_grid_rejects_bad_input() {
        assert!(matches!(
            grid_identicon_to_svg("Bob", 0, None),
            Err(IconError::InvalidSize(0))
        ));
        assert!(matches!(
            grid_identicon_to_svg("Bob", 64, Some(f32::NAN)),
            Err(IconError::InvalidPadding(_))
        ));
    }

    #[test]
    fn test_circular_png_and_svg() {
        let key = PublicKey::parse("FHNpKmJrUtusuvKPGomAygQqeiks98bdV6yD61Stb6vg").unwrap();

        let png = circular_identicon_png(&key, 48).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let svg = circular_identicon_svg(&key, 48).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<circle").count(), 20);
    }

    #[test]
    fn test_same_input_same_output() {
        let key = PublicKey::from_bytes([7u8; 32]).unwrap();
        assert_eq!(
            circular_identicon_png(&key, 24).unwrap(),
            circular_identicon_png(&key, 24).unwrap()
        );
        assert_eq!(
            grid_identicon_to_svg("same", 40, Some(0.1)).unwrap(),
            grid_identicon_to_svg("same", 40, Some(0.1)).unwrap()
        );
    }
}
