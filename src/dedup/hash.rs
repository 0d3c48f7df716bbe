//! Content hashing.

use sha2::{Digest, Sha256};

/// Number of hex characters kept by [`short_hash`].
pub const SHORT_HASH_LEN: usize = 12;

/// SHA-256 digest of `bytes`.
pub fn sha256_digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha256_digest(bytes))
}

/// First [`SHORT_HASH_LEN`] hex characters of the SHA-256 of `text`.
pub fn short_hash(text: &str) -> String {
    let mut hash = sha256_hex(text.as_bytes());
    hash.truncate(SHORT_HASH_LEN);
    hash
}

/// Whether two byte buffers have the same SHA-256 digest.
pub fn same_content(a: &[u8], b: &[u8]) -> bool {
    sha256_digest(a) == sha256_digest(b)
}
