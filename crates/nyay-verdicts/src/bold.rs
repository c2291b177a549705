//! Bold-label block extraction
//!
//! Recognizes numbered blocks of `**Label:** value` lines:
//!
//! ```text
//! 1. **Case Name:** ABC vs. XYZ
//! **Court:** SC
//! **Date:** 2023-05-01
//! **Summary:** Landmark ruling on privacy.
//! ```

use crate::strategy::VerdictStrategy;
use nyay_domain::VerdictRecord;
use regex::Regex;
use std::sync::LazyLock;

const CASE_NAME_MARKER: &str = "**Case Name:**";

/// Start of a numbered block: `<digits>. **Case Name:**` at the beginning of a line
static BLOCK_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\.\s*\*\*Case Name:\*\*").unwrap());

static CASE_NAME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Case Name:\*\*[^\S\n]*([^\n]*)").unwrap());

static COURT_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Court:\*\*[^\S\n]*([^\n]*)").unwrap());

static DATE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Date:\*\*[^\S\n]*([^\n]*)").unwrap());

/// Summary runs to the end of the block so multi-paragraph summaries stay whole
static SUMMARY_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*Summary:\*\*\s*(.*)").unwrap());

/// Strategy for `**Label:** value` blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct BoldFieldStrategy;

impl VerdictStrategy for BoldFieldStrategy {
    fn name(&self) -> &'static str {
        "bold_fields"
    }

    fn matches(&self, text: &str) -> bool {
        text.contains(CASE_NAME_MARKER)
    }

    fn extract(&self, text: &str) -> Vec<VerdictRecord> {
        split_blocks(text)
            .into_iter()
            .enumerate()
            .map(|(id, block)| record_from_block(id, block))
            .collect()
    }
}

/// Parse `text` as bold-label blocks, `None` when no `**Case Name:**` marker is present
pub fn try_parse_bold_fields(text: &str) -> Option<Vec<VerdictRecord>> {
    BoldFieldStrategy.try_parse(text)
}

/// Split before every numbered `**Case Name:**` line, dropping empty blocks
///
/// Text ahead of the first numbered block is kept as a block of its own.
fn split_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut block_start = 0;

    for start in BLOCK_START.find_iter(text).map(|m| m.start()) {
        blocks.push(&text[block_start..start]);
        block_start = start;
    }
    blocks.push(&text[block_start..]);

    blocks
        .into_iter()
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

fn capture<'a>(pattern: &Regex, block: &'a str) -> Option<&'a str> {
    pattern
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn record_from_block(id: usize, block: &str) -> VerdictRecord {
    let case_name = capture(&CASE_NAME_FIELD, block).unwrap_or("");
    let court = capture(&COURT_FIELD, block).unwrap_or("");
    let date = capture(&DATE_FIELD, block).unwrap_or("");
    let summary = capture(&SUMMARY_FIELD, block)
        .filter(|summary| !summary.replace('*', "").trim().is_empty())
        .unwrap_or(block);

    VerdictRecord::new(id, case_name, court, date, summary)
}
