use serde::{Deserialize, Serialize};

use crate::document::TextDocument;

/// A whitespace-delimited token with its position in the source document.
///
/// Token identity is exact string equality: case- and punctuation-sensitive.
/// `"A"` and `"a"` are distinct tokens by policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Index of the line the token appears on.
    pub line: usize,
    /// Byte offset (inclusive) within that line.
    pub start: usize,
    /// Byte offset (exclusive) within that line.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Tokenizes one line, producing byte offsets into that line.
///
/// Tokens are maximal runs of non-whitespace characters (Unicode whitespace
/// delimits). Deterministic and cross-platform.
pub fn tokenize_line(line: &str, line_index: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in line.char_indices() {
        if ch.is_whitespace() {
            if let Some(token_start) = start.take() {
                tokens.push(Token {
                    text: line[token_start..idx].to_string(),
                    line: line_index,
                    start: token_start,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        tokens.push(Token {
            text: line[token_start..].to_string(),
            line: line_index,
            start: token_start,
            end: line.len(),
        });
    }

    tokens
}

/// Tokenizes a whole document in line order, left to right within each line.
pub fn tokenize_document(document: &TextDocument) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (idx, line) in document.lines().iter().enumerate() {
        tokens.extend(tokenize_line(line, idx));
    }
    tokens
}
