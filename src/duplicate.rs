//! Duplicate detection over tokens and lines.
//!
//! Two granularities, chosen by the caller:
//!
//! - [`detect_duplicate_tokens`] counts whitespace-delimited tokens across
//!   the whole document with exact string identity (case- and punctuation-
//!   sensitive).
//! - [`detect_duplicate_lines`] counts whole lines keyed by their trimmed
//!   content, so lines differing only in edge whitespace collapse together.
//!
//! Both are single-pass, pure, and total: an empty document produces an
//! empty report, not an error.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::document::TextDocument;
use crate::token::{tokenize_document, Token};

/// One sighting of a token, in source order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenOccurrence {
    /// The token with its line index and byte offsets.
    pub token: Token,
    /// 0 for the first sighting of this token text, 1 for the second, and
    /// so on. First and repeat occurrences of a duplicate token are both in
    /// the duplicate set; this field is what tells them apart.
    pub repeat_index: usize,
}

/// Result of token-level duplicate detection.
///
/// Holds the full occurrence sequence in left-to-right source order plus an
/// exact count per distinct token text. The duplicate set is derived:
/// every token whose count is >= 2.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DuplicateReport {
    /// Every token occurrence, in the order it appears in the source text.
    pub occurrences: Vec<TokenOccurrence>,
    /// Occurrence count per distinct token text. `BTreeMap` keeps the
    /// serialized form deterministic.
    pub counts: BTreeMap<String, usize>,
}

impl DuplicateReport {
    /// Tokens that occur more than once, in lexicographic order.
    pub fn duplicates(&self) -> BTreeSet<&str> {
        self.counts
            .iter()
            .filter(|(_, &count)| count >= 2)
            .map(|(text, _)| text.as_str())
            .collect()
    }

    /// True if `token` belongs to the duplicate set.
    pub fn is_duplicate(&self, token: &str) -> bool {
        self.counts.get(token).is_some_and(|&count| count >= 2)
    }

    /// Occurrence count for `token`; 0 if it never appears.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// True if no token occurs more than once.
    pub fn has_no_duplicates(&self) -> bool {
        self.counts.values().all(|&count| count < 2)
    }
}

/// Count token occurrences across the whole document.
///
/// Tokenization splits every line on Unicode whitespace; token identity is
/// exact string equality. `"A"` and `"a"` are distinct by policy.
pub fn detect_duplicate_tokens(document: &TextDocument) -> DuplicateReport {
    let tokens = tokenize_document(document);
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut occurrences = Vec::with_capacity(tokens.len());

    for token in tokens {
        let seen = counts.entry(token.text.clone()).or_insert(0);
        occurrences.push(TokenOccurrence {
            token,
            repeat_index: *seen,
        });
        *seen += 1;
    }

    DuplicateReport {
        occurrences,
        counts,
    }
}

/// Trimmed line contents that appear two or more times.
///
/// Each line's leading/trailing whitespace is stripped before counting, so
/// `"x "` and `"x"` are duplicates of each other. Lines that are empty after
/// trimming are excluded: blank lines are structure, not content.
pub fn detect_duplicate_lines(document: &TextDocument) -> BTreeSet<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for line in document.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        *counts.entry(trimmed).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count >= 2)
        .map(|(line, _)| line.to_string())
        .collect()
}
