//! # Content Digest
//!
//! SHA-256 content digests computed exclusively from [`CanonicalBytes`].
//!
//! The function signature `sha256_digest(data: &CanonicalBytes)` makes it a
//! compile error to digest raw bytes, so every digest in the ledger flows
//! through the canonicalization pipeline.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// A 256-bit content digest.
///
/// Produced exclusively from [`CanonicalBytes`] via [`sha256_digest()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest(pub [u8; 32]);

impl ContentDigest {
    /// Render the digest as a lowercase hex string (64 chars).
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest(bytes)
}

/// Compute a SHA-256 lowercase hex string from canonical bytes.
///
/// Convenience wrapper around [`sha256_digest()`] for contexts that store
/// the digest as a hex string (block hashes, book identifiers).
pub fn sha256_hex(data: &CanonicalBytes) -> String {
    sha256_digest(data).to_hex()
}
