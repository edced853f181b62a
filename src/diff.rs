//! Line-level comparison of two documents.
//!
//! This module implements the positional diff that backs tamper-evidence
//! rendering: the two documents are walked by line index and every index in
//! either document yields exactly one [`DiffEntry`].
//!
//! # Positional, not minimal-edit
//!
//! The comparison is index-aligned by design. It does not attempt to detect
//! that a line was merely inserted or shifted; a one-line insertion near the
//! top will report every subsequent line as `Changed`. That behavior is part
//! of the contract and is pinned by tests rather than "fixed".

use serde::{Deserialize, Serialize};

use crate::document::TextDocument;

/// One line-level comparison result.
///
/// Produced only by [`compare_lines`]; never mutated after creation. The
/// serde representation is tagged so presentation sinks can dispatch on
/// `"kind"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffEntry {
    /// Both documents have this line and the content is equal.
    Unchanged { line_index: usize, content: String },
    /// Both documents have this line and the content differs.
    Changed {
        line_index: usize,
        original: String,
        candidate: String,
    },
    /// Only the candidate document has a line at this index.
    Added { line_index: usize, content: String },
    /// Only the original document has a line at this index.
    Removed { line_index: usize, content: String },
}

impl DiffEntry {
    /// The line index this entry covers.
    pub fn line_index(&self) -> usize {
        match self {
            DiffEntry::Unchanged { line_index, .. }
            | DiffEntry::Changed { line_index, .. }
            | DiffEntry::Added { line_index, .. }
            | DiffEntry::Removed { line_index, .. } => *line_index,
        }
    }

    /// True for entries that represent a visible change in the candidate
    /// document (`Changed` or `Added`).
    ///
    /// `Removed` is a change too, but it has no candidate line to point at;
    /// rendering surfaces it separately via [`removed_line_indices`].
    pub fn is_candidate_change(&self) -> bool {
        matches!(self, DiffEntry::Changed { .. } | DiffEntry::Added { .. })
    }
}

/// Entry counts derived from a diff, for sinks that want "how much changed"
/// without walking the entries themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub changed: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffSummary {
    /// Tally a diff entry sequence.
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        let mut summary = DiffSummary::default();
        for entry in entries {
            match entry {
                DiffEntry::Unchanged { .. } => summary.unchanged += 1,
                DiffEntry::Changed { .. } => summary.changed += 1,
                DiffEntry::Added { .. } => summary.added += 1,
                DiffEntry::Removed { .. } => summary.removed += 1,
            }
        }
        summary
    }

    /// Total number of entries tallied.
    pub fn total(&self) -> usize {
        self.unchanged + self.changed + self.added + self.removed
    }

    /// True if the diff contains no differences at all.
    pub fn is_identical(&self) -> bool {
        self.changed == 0 && self.added == 0 && self.removed == 0
    }
}

/// Compare two documents line by line.
///
/// Walks indices `0..max(len_a, len_b)` and emits exactly one entry per
/// index:
///
/// - both lines present and equal → `Unchanged`
/// - both present, content differs → `Changed`
/// - only the original has the line → `Removed`
/// - only the candidate has the line → `Added`
///
/// Output length always equals `max(line_count)`; two empty documents
/// produce an empty diff, not an error. Pure function: no I/O, no state.
pub fn compare_lines(original: &TextDocument, candidate: &TextDocument) -> Vec<DiffEntry> {
    let len = original.line_count().max(candidate.line_count());
    let mut entries = Vec::with_capacity(len);

    for index in 0..len {
        let entry = match (original.line(index), candidate.line(index)) {
            (Some(a), Some(b)) if a == b => DiffEntry::Unchanged {
                line_index: index,
                content: a.to_string(),
            },
            (Some(a), Some(b)) => DiffEntry::Changed {
                line_index: index,
                original: a.to_string(),
                candidate: b.to_string(),
            },
            (Some(a), None) => DiffEntry::Removed {
                line_index: index,
                content: a.to_string(),
            },
            (None, Some(b)) => DiffEntry::Added {
                line_index: index,
                content: b.to_string(),
            },
            // Unreachable: index < max(len_a, len_b) guarantees one side.
            (None, None) => unreachable!("diff index beyond both documents"),
        };
        entries.push(entry);
    }

    entries
}

/// Indices of lines present only in the original document.
///
/// The candidate-oriented rendering cannot show removed lines; callers that
/// present "lines removed: {indices}" pull them from here.
pub fn removed_line_indices(entries: &[DiffEntry]) -> Vec<usize> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            DiffEntry::Removed { line_index, .. } => Some(*line_index),
            _ => None,
        })
        .collect()
}
