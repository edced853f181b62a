//! # Content comparison layer
//!
//! This crate compares two versions of extracted document text and reports
//! what differs, for document verification pipelines. It consumes plain text
//! from an upstream extraction stage (OCR, PDF text extraction, or a plain
//! upload) and hands structured results plus marked-up renderings to a
//! downstream presentation sink.
//!
//! ## Contract
//!
//! - The comparison layer **only** consumes already-decoded text. It never
//!   decodes bytes, validates encodings, or touches files.
//! - Every text-consuming operation is total: any string, including the
//!   empty string, has a defined non-error result. `Err` arises only from an
//!   invalid [`CompareConfig`].
//! - The API is a pure function of `(text, config)` with no I/O, no clocks,
//!   and no global process state.
//!
//! Invariant: for the same inputs and the same [`CompareConfig`], every
//! operation produces bit-identical output on any machine.
//!
//! ## Operations
//!
//! 1. **Line diff** ([`compare_lines`]): positional, index-aligned walk over
//!    both documents producing one [`DiffEntry`] per line index. This is
//!    deliberately not a minimal-edit diff; a shifted line cascades as
//!    `Changed` entries below it.
//! 2. **Highlight rendering** ([`render_highlighted`]): the candidate
//!    document with changed/added lines wrapped in configured markers.
//! 3. **Duplicate detection** ([`detect_duplicate_tokens`],
//!    [`detect_duplicate_lines`]): exact-count duplicate sets at token or
//!    trimmed-line granularity, with a position-preserving marked rendering
//!    via [`render_duplicates`].
//! 4. **Identity hashes** ([`hash_document`]): version-aware SHA-256 so
//!    callers can short-circuit "nothing changed" before diffing.
//!
//! ## Example
//!
//! ```rust
//! use comparator::{compare_texts, highlight_changes, CompareConfig, DiffEntry};
//!
//! let entries = compare_texts("line1\nline2", "line1\nedited");
//! assert!(matches!(entries[1], DiffEntry::Changed { .. }));
//!
//! let rendered = highlight_changes("line1\nline2", "line1\nedited", &CompareConfig::default())
//!     .expect("valid config");
//! assert_eq!(rendered, "line1\n**edited**");
//! ```

mod config;
mod diff;
mod document;
mod duplicate;
mod error;
mod hash;
mod render;
mod token;

pub use crate::config::CompareConfig;
pub use crate::diff::{compare_lines, removed_line_indices, DiffEntry, DiffSummary};
pub use crate::document::TextDocument;
pub use crate::duplicate::{
    detect_duplicate_lines, detect_duplicate_tokens, DuplicateReport, TokenOccurrence,
};
pub use crate::error::CompareError;
pub use crate::hash::{hash_document, hash_text};
pub use crate::render::{render_duplicates, render_highlighted};
pub use crate::token::{tokenize_document, tokenize_line, Token};

/// Current comparison schema version for this crate.
///
/// Bump whenever the line policy, marker placement, or hash construction
/// changes in a way that affects observable output.
pub const COMPARE_VERSION: u32 = 1;

/// Compare two raw text blobs line by line.
///
/// Blob-level convenience over [`compare_lines`]; both blobs are split under
/// the crate line policy first.
pub fn compare_texts(original: &str, candidate: &str) -> Vec<DiffEntry> {
    compare_lines(
        &TextDocument::from_text(original),
        &TextDocument::from_text(candidate),
    )
}

/// Compare two raw text blobs and render the candidate with changes
/// highlighted, in one call.
pub fn highlight_changes(
    original: &str,
    candidate: &str,
    cfg: &CompareConfig,
) -> Result<String, CompareError> {
    let candidate_doc = TextDocument::from_text(candidate);
    let entries = compare_lines(&TextDocument::from_text(original), &candidate_doc);
    render_highlighted(&candidate_doc, &entries, cfg)
}
