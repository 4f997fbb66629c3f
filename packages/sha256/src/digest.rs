//! Digest value with encoding support

use crate::constants::DIGEST_LEN;
use crate::{HashError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use subtle::ConstantTimeEq;

/// A finished 256-bit SHA-256 digest
///
/// Renders as 64 uppercase hex characters, most significant byte of `h0`
/// first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Get the raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to a Vec<u8>
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Get the digest as an uppercase hexadecimal string (canonical form)
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Get the digest as a lowercase hexadecimal string
    #[must_use]
    pub fn to_hex_lower(&self) -> String {
        hex::encode(self.0)
    }

    /// Get the digest as a base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD.encode(self.0)
    }

    /// Compare against another digest without early exit on the first
    /// differing byte
    #[must_use]
    pub fn matches(&self, other: &Digest) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }

    /// Length of a digest in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        DIGEST_LEN
    }

    /// Always false
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.0.to_vec()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = HashError;

    /// Parse 64 hex characters in either case
    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)
            .map_err(|e| HashError::InvalidDigest(format!("{e} in {s:?}")))?;
        Ok(Self(bytes))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
