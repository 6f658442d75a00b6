//! Content fingerprinting
//!
//! Fingerprints are MD5 digests. They identify content for display only and
//! make no security claim.

use md5::{Digest, Md5};
use std::fmt;

/// Size of a fingerprint in bytes (128 bits)
pub const FINGERPRINT_LEN: usize = 16;

/// A 128-bit content hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Wraps raw digest bytes
    pub fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, 32 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Computes the fingerprint of `content`
///
/// # Examples
///
/// ```
/// use urlhash::pipeline::fingerprint;
///
/// assert_eq!(fingerprint(b"42").to_hex(), "a1d0c6e83f027327d8461063f4ac58a6");
/// ```
pub fn fingerprint(content: &[u8]) -> Fingerprint {
    let digest = Md5::digest(content);
    let mut bytes = [0u8; FINGERPRINT_LEN];
    bytes.copy_from_slice(&digest);
    Fingerprint(bytes)
}
