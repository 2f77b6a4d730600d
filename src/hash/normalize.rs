//! Keep-or-create hash logic.
//!
//! The SHA-1 digest is rendered the way a big-integer hex conversion renders
//! it: leading zero nibbles are dropped. Existing icons were generated from
//! these shortened strings, so the shortening is kept for compatibility.

use regex::Regex;
use sha1::{Digest, Sha1};
use std::fmt;
use std::sync::LazyLock;

/// Minimum number of hex characters the grid generator reads from.
pub const MIN_HASH_LEN: usize = 11;

static RE_VALID_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{11,}$").unwrap());

/// Check whether `value` can be used as a hash without rehashing.
#[inline]
pub fn is_valid_hash(value: &str) -> bool {
    RE_VALID_HASH.is_match(value)
}

/// Return `value` unchanged if it is a valid hash, otherwise its SHA-1 hex.
pub fn normalize(value: &str) -> HashString {
    if is_valid_hash(value) {
        return HashString(value.to_string());
    }
    HashString::from_digest(&Sha1::digest(value.as_bytes()))
}

/// A hex string of at least [`MIN_HASH_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashString(String);

impl HashString {
    /// Unsigned big-endian integer hex of `digest`, without zero padding.
    fn from_digest(digest: &[u8]) -> Self {
        let full = hex::encode(digest);
        let trimmed = full.trim_start_matches('0');
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        Self(format!("{trimmed:0>width$}", width = MIN_HASH_LEN))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of the hex digit at `index`.
    #[inline]
    pub fn nibble(&self, index: usize) -> u8 {
        self.0
            .as_bytes()
            .get(index)
            .and_then(|c| (*c as char).to_digit(16))
            .map_or(0, |d| d as u8)
    }

    /// Hue in `[0, 1]` read from the last seven hex digits.
    pub fn hue(&self) -> f32 {
        let tail = &self.0[self.0.len().saturating_sub(7)..];
        let value = u32::from_str_radix(tail, 16).unwrap_or(0);
        value as f32 / 0x0FFF_FFFF as f32
    }
}

impl fmt::Display for HashString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HashString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_hash_boundaries() {
        assert!(is_valid_hash("0123456789a"));
        assert!(is_valid_hash("0123456789ABCDEF"));
        assert!(!is_valid_hash("0123456789"));
        assert!(!is_valid_hash("0123456789g"));
        assert!(!is_valid_hash(""));
        assert!(!is_valid_hash("0123456789a "));
    }

    #[test]
    fn test_valid_hash_kept_verbatim() {
        assert_eq!(normalize("deadbeef123").as_str(), "deadbeef123");
        assert_eq!(normalize("0123456789ABCDEF").as_str(), "0123456789ABCDEF");
    }

    #[test]
    fn test_seed_is_sha1_hashed() {
        assert_eq!(
            normalize("deadbeef").as_str(),
            "f49cf6381e322b147053b74e4500af8533ac1e4c"
        );
    }

    #[test]
    fn test_leading_zero_nibbles_are_dropped() {
        // sha1("seed-21") = 05dbd3d5ce8e5a6a869cbf51ca8416e3330c1e0b
        let hash = normalize("seed-21");
        assert_eq!(hash.len(), 39);
        assert_eq!(hash.as_str(), "5dbd3d5ce8e5a6a869cbf51ca8416e3330c1e0b");

        // sha1("key-72") = 00d384fda39467001f47b2802808f18bc7e92879
        let hash = normalize("key-72");
        assert_eq!(hash.len(), 38);
        assert_eq!(hash.as_str(), "d384fda39467001f47b2802808f18bc7e92879");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["Alice", "Bob", "seed-21", "", "deadbeef123", "ünïcödé"] {
            let once = normalize(input);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_short_digest_is_padded() {
        let hash = HashString::from_digest(&[0u8; 20]);
        assert_eq!(hash.as_str(), "00000000000");
        assert!(is_valid_hash(hash.as_str()));
    }

    #[test]
    fn test_nibble_and_hue() {
        let hash = normalize("0123456789abcdef");
        assert_eq!(hash.nibble(0), 0);
        assert_eq!(hash.nibble(10), 10);
        assert_eq!(hash.nibble(15), 15);
        assert_eq!(hash.nibble(99), 0);

        let hash = normalize("00000000000fffffff");
        assert!((hash.hue() - 1.0).abs() < 1e-6);
        let hash = normalize("000000000000000000");
        assert_eq!(hash.hue(), 0.0);
    }
}
