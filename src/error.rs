//! Library error types.

use thiserror::Error;

/// Errors produced while generating an identicon.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon size must be between 1 and {max} pixels, got {0}", max = MAX_SIZE)]
    InvalidSize(u32),

    #[error("padding must be a finite fraction in [0, 0.5), got {0}")]
    InvalidPadding(f32),

    #[error("public key is empty")]
    EmptyKey,

    #[error("invalid {encoding} public key: {reason}")]
    KeyDecode {
        encoding: &'static str,
        reason: String,
    },

    #[error("failed to encode image")]
    Encode(#[from] image::ImageError),
}

pub type Result<T, E = IconError> = std::result::Result<T, E>;

/// Largest accepted icon edge in pixels. An RGBA raster of this size is 64 MiB.
pub const MAX_SIZE: u32 = 4096;

/// Reject sizes outside `1..=MAX_SIZE`.
pub(crate) fn check_size(size: u32) -> Result<()> {
    if !(1..=MAX_SIZE).contains(&size) {
        return Err(IconError::InvalidSize(size));
    }
    Ok(())
}
