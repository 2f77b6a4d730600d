//! Public key input for the circular identicon.
//!
//! Keys are plain byte strings of any non-zero length. They arrive as raw
//! bytes, hex (with or without `0x`) or base58 (Bitcoin alphabet).

use crate::error::{IconError, Result};
use std::fmt;
use std::str::FromStr;

/// How a textual key should be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum KeyEncoding {
    /// `0x` prefix or even-length hex is hex, anything else base58.
    #[default]
    Auto,
    Hex,
    Base58,
}

/// Raw public key bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(IconError::EmptyKey);
        }
        Ok(Self(bytes))
    }

    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = strip_hex_prefix(value.trim());
        let bytes = hex::decode(digits).map_err(|e| IconError::KeyDecode {
            encoding: "hex",
            reason: e.to_string(),
        })?;
        Self::from_bytes(bytes)
    }

    pub fn from_base58(value: &str) -> Result<Self> {
        let bytes = bs58::decode(value.trim())
            .into_vec()
            .map_err(|e| IconError::KeyDecode {
                encoding: "base58",
                reason: e.to_string(),
            })?;
        Self::from_bytes(bytes)
    }

    /// Decode with auto-detection.
    pub fn parse(value: &str) -> Result<Self> {
        Self::decode(value, KeyEncoding::Auto)
    }

    pub fn decode(value: &str, encoding: KeyEncoding) -> Result<Self> {
        match encoding {
            KeyEncoding::Hex => Self::from_hex(value),
            KeyEncoding::Base58 => Self::from_base58(value),
            KeyEncoding::Auto if looks_like_hex(value.trim()) => Self::from_hex(value),
            KeyEncoding::Auto => Self::from_base58(value),
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

fn looks_like_hex(value: &str) -> bool {
    if value.starts_with("0x") || value.starts_with("0X") {
        return true;
    }
    !value.is_empty() && value.len() % 2 == 0 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

impl FromStr for PublicKey {
    type Err = IconError;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(0x{})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}
