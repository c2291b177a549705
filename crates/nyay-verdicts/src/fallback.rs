//! Last-resort strategy wrapping the whole text as one record

use crate::strategy::VerdictStrategy;
use nyay_domain::{VerdictRecord, SINGLETON_CASE_NAME};

/// Strategy that always matches non-empty text
#[derive(Debug, Clone, Copy, Default)]
pub struct SingletonStrategy;

impl VerdictStrategy for SingletonStrategy {
    fn name(&self) -> &'static str {
        "singleton"
    }

    fn matches(&self, text: &str) -> bool {
        !text.trim().is_empty()
    }

    fn extract(&self, text: &str) -> Vec<VerdictRecord> {
        vec![VerdictRecord::new(0, SINGLETON_CASE_NAME, "", "", text)]
    }
}

/// Wrap `text` as a single `"Recent Verdicts"` record, or nothing for blank text
pub fn wrap_whole(text: &str) -> Vec<VerdictRecord> {
    SingletonStrategy.try_parse(text).unwrap_or_default()
}
