//! Markdown table extraction
//!
//! Recognizes output shaped like
//!
//! ```text
//! | Case Name | Date | Court | Summary |
//! |---|---|---|---|
//! | State vs. Sharma | 2024-01-10 | Delhi HC | Bail granted |
//! ```
//!
//! Columns are mapped by position: case name, date, court, then everything
//! else joined with `" | "` as the summary.

use crate::strategy::VerdictStrategy;
use nyay_domain::{clean_field, VerdictRecord};
use tracing::warn;

const CASE_NAME_HEADER: &str = "case name";
const SUMMARY_CELL_SEPARATOR: &str = " | ";

/// Strategy for pipe-delimited markdown tables
#[derive(Debug, Clone, Copy, Default)]
pub struct TableStrategy;

impl VerdictStrategy for TableStrategy {
    fn name(&self) -> &'static str {
        "table"
    }

    fn matches(&self, text: &str) -> bool {
        text.lines().map(str::trim).any(is_header_row)
    }

    fn extract(&self, text: &str) -> Vec<VerdictRecord> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some(header_index) = find_header(&lines) else {
            return Vec::new();
        };

        lines[header_index + 1..]
            .iter()
            .filter(|line| {
                line.starts_with('|') && !is_separator_row(line) && !is_header_row(line)
            })
            .enumerate()
            .map(|(id, line)| record_from_row(id, line))
            .collect()
    }
}

/// Parse `text` as a markdown table, `None` when no `Case Name` header is present
///
/// A header with no data rows is a match with zero records.
pub fn try_parse_table(text: &str) -> Option<Vec<VerdictRecord>> {
    TableStrategy.try_parse(text)
}

/// Index of the header row
///
/// Prefers a `Case Name` row directly followed by a separator row, then any
/// `Case Name` row, then the first pipe-led line.
fn find_header(lines: &[&str]) -> Option<usize> {
    let primary = lines.iter().enumerate().position(|(idx, line)| {
        is_header_row(line) && lines.get(idx + 1).is_some_and(|next| is_separator_row(next))
    });

    primary.or_else(|| {
        let fallback = lines
            .iter()
            .position(|line| is_header_row(line))
            .or_else(|| lines.iter().position(|line| line.starts_with('|')));
        if let Some(idx) = fallback {
            warn!(line = idx, "Table header has no separator row");
        }
        fallback
    })
}

fn is_header_row(line: &str) -> bool {
    line.starts_with('|')
        && split_cells(line)
            .first()
            .is_some_and(|cell| clean_field(cell).eq_ignore_ascii_case(CASE_NAME_HEADER))
}

/// A row made only of pipes, dashes, colons and whitespace
fn is_separator_row(line: &str) -> bool {
    line.starts_with('|')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Cells between the leading pipe and the trailing pipe (if any), trimmed
fn split_cells(line: &str) -> Vec<&str> {
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

fn record_from_row(id: usize, line: &str) -> VerdictRecord {
    let cells = split_cells(line);
    let cell = |idx: usize| cells.get(idx).copied().unwrap_or("");
    let summary = cells.get(3..).map(|rest| rest.join(SUMMARY_CELL_SEPARATOR)).unwrap_or_default();

    VerdictRecord::new(id, cell(0), cell(2), cell(1), &summary)
}
