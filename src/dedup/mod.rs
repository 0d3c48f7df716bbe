//! Deduplication module.
//!
//! Provides SHA-256 hashing used to skip rewriting unchanged files and to
//! disambiguate extensionless filenames.

pub mod hash;

pub use hash::{same_content, sha256_digest, sha256_hex, short_hash};
