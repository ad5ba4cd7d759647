//! Move Digests
//!
//! HMAC-SHA256 keyed with the session's secret key, computed over the
//! UTF-8 bytes of a move label. Keys and digests travel as lowercase hex.

use std::fmt;
use std::str::FromStr;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::KEY_LEN;

type HmacSha256 = Hmac<Sha256>;

/// Digest output length in bytes.
pub const DIGEST_LEN: usize = 32;

/// Errors decoding a hex-encoded key or digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded to the wrong number of bytes.
    #[error("expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Decoded length.
        got: usize,
    },
}

fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], DecodeError> {
    let bytes = hex::decode(s.trim()).map_err(|e| DecodeError::InvalidHex(e.to_string()))?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| DecodeError::InvalidLength { expected: N, got })
}

/// Secret HMAC key.
///
/// `Debug` never prints the bytes; the key must stay hidden until the
/// user has answered.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 chars.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex.
    pub fn from_hex(s: &str) -> Result<Self, DecodeError> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl FromStr for SecretKey {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// HMAC-SHA256 digest of a move label.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MoveDigest([u8; DIGEST_LEN]);

impl MoveDigest {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 chars.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex (either case).
    pub fn from_hex(s: &str) -> Result<Self, DecodeError> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Display for MoveDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for MoveDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveDigest({})", self.to_hex())
    }
}

impl FromStr for MoveDigest {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<MoveDigest> for String {
    fn from(digest: MoveDigest) -> Self {
        digest.to_hex()
    }
}

impl TryFrom<String> for MoveDigest {
    type Error = DecodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

fn keyed_mac(key: &SecretKey) -> HmacSha256 {
    // HMAC takes keys of any length
    match HmacSha256::new_from_slice(key.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC-SHA256 rejected a {}-byte key", KEY_LEN),
    }
}

/// Compute `HMAC-SHA256(key, label)`.
pub fn compute_digest(key: &SecretKey, label: &str) -> MoveDigest {
    let mut mac = keyed_mac(key);
    mac.update(label.as_bytes());
    MoveDigest(mac.finalize().into_bytes().into())
}

/// Check `digest == HMAC-SHA256(key, label)` in constant time.
pub fn verify_digest(key: &SecretKey, label: &str, digest: &MoveDigest) -> bool {
    let mut mac = keyed_mac(key);
    mac.update(label.as_bytes());
    mac.verify_slice(digest.as_bytes()).is_ok()
}

// =============================================================================
// TESTS
// =============================================================================
