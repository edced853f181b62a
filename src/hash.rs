//! Version-aware identity hashes for compared documents.
//!
//! These let callers answer "has anything changed at all?" with one equality
//! check before asking the diff "what changed?".
//!
//! # Hash construction
//!
//! ```text
//! document: SHA-256(version.to_be_bytes() || 0x00 || line-joined text bytes)
//! ```
//!
//! The version is [`CompareConfig::version`](crate::CompareConfig); including
//! it means a behavior change in the line policy produces distinct hashes
//! instead of silently colliding with old ones. The discriminator byte
//! reserves room for future per-line or per-token hash kinds.

use sha2::{Digest, Sha256};

use crate::document::TextDocument;

/// Compute the identity hash for a document under a given config version.
///
/// The hash covers the document's lines joined with `\n`, so two blobs that
/// differ only in a trailing line break or in `\r\n` versus `\n` hash
/// identically, consistent with the crate line policy.
///
/// # Returns
///
/// A 64-character hex string (SHA-256).
pub fn hash_document(document: &TextDocument, version: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(version.to_be_bytes());
    hasher.update([0]); // discriminator: document level
    for (index, line) in document.lines().iter().enumerate() {
        if index > 0 {
            hasher.update(b"\n");
        }
        hasher.update(line.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Hash arbitrary text with SHA-256 and return a hex digest.
///
/// Version-agnostic convenience for diagnostics and quick content checks;
/// for identity comparison use [`hash_document`].
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
