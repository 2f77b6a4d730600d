//! Hash normalization for the grid identicon.
//!
//! Any input string is turned into a [`HashString`]: valid hex hashes are kept
//! verbatim, everything else is hashed with SHA-1 first.

mod normalize;

pub use normalize::{HashString, is_valid_hash, normalize};
