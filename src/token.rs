//! Shared-secret token verification.
//!
//! The firmware image stores only the SHA-256 digest of the token (generate
//! one with the `dht-station-tokengen` binary); presented tokens are hashed
//! and compared in constant time.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Shared-secret guard holding the SHA-256 digest of the expected token.
///
/// # Security
///
/// - Only the digest lives in the binary; `from_digest` keeps the plaintext
///   out of the image entirely
/// - Verification uses `subtle::ConstantTimeEq` to prevent timing attacks
#[derive(Debug, Clone)]
pub struct TokenGuard {
    digest: [u8; 32],
}

impl TokenGuard {
    /// Create a guard from a plaintext token, hashing it at construction.
    pub fn from_plain(token: &str) -> Self {
        Self {
            digest: digest_of(token),
        }
    }

    /// Create a guard from a precomputed SHA-256 digest (tokengen output).
    pub const fn from_digest(digest: [u8; 32]) -> Self {
        Self { digest }
    }

    /// Verify a presented token in constant time.
    pub fn verify(&self, presented: &str) -> bool {
        digest_of(presented).ct_eq(&self.digest).into()
    }
}

fn digest_of(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}
