//! Verdict records - the structured output unit of the verdict parser

use serde::{Deserialize, Serialize};

/// Value used for a court or date that could not be recovered from the text
pub const NOT_AVAILABLE: &str = "N/A";

/// Case name given to the single record produced when no structure is found
pub const SINGLETON_CASE_NAME: &str = "Recent Verdicts";

/// Default limit (in characters) for case names derived from a paragraph's first line
pub const DEFAULT_CASE_NAME_MAX_CHARS: usize = 120;

/// Placeholder case name for the `n`-th record (1-based)
///
/// # Examples
///
/// ```
/// use nyay_domain::placeholder_case_name;
///
/// assert_eq!(placeholder_case_name(3), "Verdict 3");
/// ```
pub fn placeholder_case_name(n: usize) -> String {
    format!("Verdict {}", n)
}

/// Strip markdown emphasis markers (`*`) and surrounding whitespace
///
/// # Examples
///
/// ```
/// use nyay_domain::clean_field;
///
/// assert_eq!(clean_field("  **Delhi HC** "), "Delhi HC");
/// ```
pub fn clean_field(value: &str) -> String {
    value.replace('*', "").trim().to_string()
}

/// A single court verdict recovered from model output
///
/// Every field always holds a string. Records are created fresh on each parse
/// and carry no identity beyond their position in the output sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictRecord {
    /// Ordinal position in the output sequence (0-based)
    pub id: usize,

    /// Short human-readable title, never empty
    pub case_name: String,

    /// Issuing court, `"N/A"` when absent
    pub court: String,

    /// Date as written by the issuing court, `"N/A"` when absent
    pub date: String,

    /// Descriptive body text
    pub summary: String,
}

impl VerdictRecord {
    /// Create a record, normalizing every field
    ///
    /// Emphasis markers and surrounding whitespace are removed. An empty case
    /// name falls back to `"Verdict {id + 1}"`, an empty court or date to
    /// `"N/A"`. The summary may be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nyay_domain::VerdictRecord;
    ///
    /// let record = VerdictRecord::new(1, "", " **SC** ", "", "Ruling");
    /// assert_eq!(record.case_name, "Verdict 2");
    /// assert_eq!(record.court, "SC");
    /// assert_eq!(record.date, "N/A");
    /// ```
    pub fn new(id: usize, case_name: &str, court: &str, date: &str, summary: &str) -> Self {
        Self {
            id,
            case_name: non_empty_or(clean_field(case_name), || placeholder_case_name(id + 1)),
            court: non_empty_or(clean_field(court), || NOT_AVAILABLE.to_string()),
            date: non_empty_or(clean_field(date), || NOT_AVAILABLE.to_string()),
            summary: clean_field(summary),
        }
    }

    /// Whether the court was recovered from the source text
    pub fn has_court(&self) -> bool {
        self.court != NOT_AVAILABLE
    }

    /// Whether the date was recovered from the source text
    pub fn has_date(&self) -> bool {
        self.date != NOT_AVAILABLE
    }
}

fn non_empty_or(value: String, fallback: impl FnOnce() -> String) -> String {
    if value.is_empty() {
        fallback()
    } else {
        value
    }
}
