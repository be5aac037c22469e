//! HMAC secret key material.

use crate::error::TokenError;
use base64::Engine;
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// How configured key material is turned into key bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEncoding {
    /// Hex-decode even-length hex strings, otherwise keep the low byte of
    /// each UTF-16 code unit. ASCII material is used as-is.
    #[default]
    Auto,
    /// Raw UTF-8 bytes.
    Utf8,
    /// Hex string.
    Hex,
    /// Standard base64 with padding.
    Base64,
}

impl FromStr for KeyEncoding {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "utf8" | "utf-8" | "raw" => Ok(Self::Utf8),
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            _ => Err(TokenError::config(format!("Invalid key encoding: {}", s))),
        }
    }
}

/// Symmetric signing key. Wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Wrap raw key bytes.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// Decode key material using the given encoding.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the material is not valid for an
    /// explicit `Hex` or `Base64` encoding.
    pub fn decode(material: &str, encoding: KeyEncoding) -> Result<Self, TokenError> {
        let bytes = match encoding {
            KeyEncoding::Auto if looks_like_hex(material) => decode_hex(material)?,
            KeyEncoding::Auto => material.encode_utf16().map(|unit| (unit & 0xff) as u8).collect(),
            KeyEncoding::Utf8 => material.as_bytes().to_vec(),
            KeyEncoding::Hex => decode_hex(material)?,
            KeyEncoding::Base64 => base64::engine::general_purpose::STANDARD
                .decode(material)
                .map_err(|e| TokenError::config(format!("Invalid base64 key: {}", e)))?,
        };
        Ok(Self { bytes })
    }

    /// Key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the key has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

fn looks_like_hex(s: &str) -> bool {
    !s.is_empty() && s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn decode_hex(s: &str) -> Result<Vec<u8>, TokenError> {
    hex::decode(s).map_err(|e| TokenError::config(format!("Invalid hex key: {}", e)))
}
