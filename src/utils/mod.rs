//! Small helpers shared by the batch and CLI layers.

pub mod fingerprint;
pub mod text;

pub use fingerprint::{FINGERPRINT_LEN, fingerprint};
pub use text::{plural_count, preview};
