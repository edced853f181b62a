//! Document types for the comparison layer.
//!
//! This module defines [`TextDocument`], the immutable line-oriented view of
//! an extracted text blob that all comparison operations consume.
//!
//! # Line policy
//!
//! A document's lines are derived from its source blob with `str::lines`
//! semantics, held uniformly for every input:
//!
//! - Segments are split on `\n`; a trailing `\r` on a segment is stripped, so
//!   `\r\n` input is tolerated.
//! - A single final empty segment produced by a trailing line break is
//!   dropped (`"a\n"` has one line).
//! - Interior empty segments are preserved (`"a\n\nb"` has three lines).
//! - The empty string has zero lines.
//!
//! # Determinism
//!
//! Construction is a pure function of the source blob. The document is
//! immutable once built; the same blob yields the same lines on any machine.

use serde::{Deserialize, Serialize};

/// An ordered, immutable sequence of lines derived from a single text blob.
///
/// `TextDocument` places no constraint on how the text was produced (OCR,
/// PDF extraction, plain upload); it only requires already-decoded UTF-8.
///
/// # Examples
///
/// ```rust
/// use comparator::TextDocument;
///
/// let doc = TextDocument::from_text("line1\nline2\n");
/// assert_eq!(doc.line_count(), 2);
/// assert_eq!(doc.line(1), Some("line2"));
/// assert_eq!(doc.line(2), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TextDocument {
    lines: Vec<String>,
}

impl TextDocument {
    /// Build a document from a raw text blob using the crate line policy.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Build a document from pre-split lines.
    ///
    /// The caller is responsible for the lines not containing embedded line
    /// breaks; this constructor does not re-split them.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True if the document has zero lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`, or `None` past the end.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The document re-joined with `\n`.
    ///
    /// This is the byte sequence the identity hash covers. Note that under
    /// the line policy a trailing line break in the original blob is not
    /// round-tripped.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        TextDocument::from_text(text)
    }
}
