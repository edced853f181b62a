//! Human-oriented renderings of diff and duplicate results.
//!
//! The renderings are plain marked-up text: the core does not target any
//! specific display technology. The marker pair comes from
//! [`CompareConfig`]; the default `**`…`**` reads as bold in Markdown-aware
//! sinks.

use crate::config::CompareConfig;
use crate::diff::DiffEntry;
use crate::document::TextDocument;
use crate::duplicate::DuplicateReport;
use crate::error::CompareError;

/// Render the candidate document with changed and added lines highlighted.
///
/// For each candidate line, if the diff marks that line index as `Changed`
/// or `Added`, the line content is wrapped in the configured markers;
/// otherwise it is emitted unmodified. Lines are joined with `\n`.
///
/// Output line count always equals the candidate's line count. `Removed`
/// entries have no candidate line to render; surface them via
/// [`removed_line_indices`](crate::removed_line_indices).
pub fn render_highlighted(
    candidate: &TextDocument,
    entries: &[DiffEntry],
    cfg: &CompareConfig,
) -> Result<String, CompareError> {
    cfg.validate()?;

    // One flag per candidate line; entries beyond the candidate (Removed)
    // or out of range are ignored here.
    let mut highlight = vec![false; candidate.line_count()];
    for entry in entries {
        if entry.is_candidate_change() {
            if let Some(flag) = highlight.get_mut(entry.line_index()) {
                *flag = true;
            }
        }
    }

    let mut out = String::new();
    for (index, line) in candidate.lines().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if highlight[index] {
            out.push_str(&cfg.highlight_open);
            out.push_str(line);
            out.push_str(&cfg.highlight_close);
        } else {
            out.push_str(line);
        }
    }

    Ok(out)
}

/// Render the token stream of a duplicate report with every occurrence of a
/// duplicate token marked.
///
/// Tokens are joined with single spaces in their original left-to-right
/// order. First and repeat occurrences are marked alike; the report's
/// `repeat_index` is what distinguishes them for machine consumers.
pub fn render_duplicates(
    report: &DuplicateReport,
    cfg: &CompareConfig,
) -> Result<String, CompareError> {
    cfg.validate()?;

    let mut out = String::new();
    for occurrence in &report.occurrences {
        if !out.is_empty() {
            out.push(' ');
        }
        if report.is_duplicate(&occurrence.token.text) {
            out.push_str(&cfg.highlight_open);
            out.push_str(&occurrence.token.text);
            out.push_str(&cfg.highlight_close);
        } else {
            out.push_str(&occurrence.token.text);
        }
    }

    Ok(out)
}
