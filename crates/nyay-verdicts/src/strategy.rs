//! Detector + extractor interface shared by every parsing strategy

use nyay_domain::VerdictRecord;

/// One structural hypothesis about how model output is laid out
///
/// The pipeline asks each strategy in turn whether its structural
/// precondition holds and takes the output of the first that says yes.
/// Strategies receive already-sanitized text.
pub trait VerdictStrategy: Send + Sync {
    /// Stable name used in logs
    fn name(&self) -> &'static str;

    /// Whether the text has this strategy's structural precondition
    fn matches(&self, text: &str) -> bool;

    /// Extract records, assuming [`matches`](Self::matches) returned true
    fn extract(&self, text: &str) -> Vec<VerdictRecord>;

    /// Extract if the precondition holds, `None` for no-match
    ///
    /// `Some(vec![])` is a valid match with zero records and stops the cascade.
    fn try_parse(&self, text: &str) -> Option<Vec<VerdictRecord>> {
        if self.matches(text) {
            Some(self.extract(text))
        } else {
            None
        }
    }
}
