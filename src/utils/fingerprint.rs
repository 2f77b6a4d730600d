//! Stable short identifiers for seeds and keys.
//!
//! Batch output files are named after the fingerprint of their input, so the
//! same seed always maps to the same file name regardless of characters that
//! are unsafe in paths.

/// Number of hex characters in a fingerprint.
pub const FINGERPRINT_LEN: usize = 12;

/// First [`FINGERPRINT_LEN`] hex characters of the blake3 hash of `value`.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    let hash = blake3::hash(value.as_ref());
    let mut hex = hash.to_hex().to_string();
    hex.truncate(FINGERPRINT_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_shape() {
        let fp = fingerprint("Alice");
        assert_eq!(fp.len(), FINGERPRINT_LEN);
        assert!(fp.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn test_fingerprint_is_stable_and_distinct() {
        assert_eq!(fingerprint("Alice"), fingerprint(b"Alice"));
        assert_ne!(fingerprint("Alice"), fingerprint("alice"));
        // blake3("") = af1349b9f5f9a1a6...
        assert_eq!(fingerprint(""), "af1349b9f5f9");
    }
}
