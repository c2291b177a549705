//! Blank-line paragraph extraction

use crate::strategy::VerdictStrategy;
use nyay_domain::{clean_field, VerdictRecord, DEFAULT_CASE_NAME_MAX_CHARS};
use regex::Regex;
use std::sync::LazyLock;

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Strategy that treats each blank-line separated paragraph as one verdict
///
/// The case name is the paragraph's first line, cut to `case_name_max_chars`
/// characters. Court and date are never recovered.
#[derive(Debug, Clone, Copy)]
pub struct ParagraphStrategy {
    case_name_max_chars: usize,
}

impl ParagraphStrategy {
    /// Create a paragraph strategy with the given case-name limit
    pub fn new(case_name_max_chars: usize) -> Self {
        Self {
            case_name_max_chars,
        }
    }
}

impl Default for ParagraphStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_CASE_NAME_MAX_CHARS)
    }
}

impl VerdictStrategy for ParagraphStrategy {
    fn name(&self) -> &'static str {
        "paragraphs"
    }

    fn matches(&self, text: &str) -> bool {
        paragraphs(text).nth(1).is_some()
    }

    fn extract(&self, text: &str) -> Vec<VerdictRecord> {
        paragraphs(text)
            .enumerate()
            .map(|(id, paragraph)| {
                let first_line = paragraph.lines().next().unwrap_or_default();
                let case_name: String = clean_field(first_line)
                    .chars()
                    .take(self.case_name_max_chars)
                    .collect();
                VerdictRecord::new(id, &case_name, "", "", paragraph)
            })
            .collect()
    }
}

/// Split `text` on blank lines, `None` when it holds fewer than two paragraphs
pub fn try_parse_paragraphs(text: &str) -> Option<Vec<VerdictRecord>> {
    ParagraphStrategy::default().try_parse(text)
}

fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
}
