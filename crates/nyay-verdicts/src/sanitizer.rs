//! Text normalization applied before structural detection

use regex::Regex;
use std::sync::LazyLock;

/// Zero-width space, joiner, non-joiner and byte-order mark
static INVISIBLE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{200B}-\u{200D}\u{FEFF}]").unwrap());

/// Runs of `-`, `_` and `,` left over from model formatting, replaced by a space
static PUNCTUATION_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_,]{2,}").unwrap());

/// Ellipses and longer dot runs, deleted outright
static DOT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{3,}").unwrap());

/// Two or more whitespace characters that are not newlines
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]{2,}").unwrap());

/// Horizontal whitespace hugging a newline
static SPACE_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]*\n[^\S\n]*").unwrap());

/// Three or more newlines
static BLANK_LINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize raw model output
///
/// Strips invisible characters, normalizes line endings to `\n`, replaces
/// `-`/`_`/`,` runs with a space, deletes dot runs, collapses repeated spaces
/// into one space, and trims the result. Line structure is kept: single line
/// breaks survive, blank-line paragraph breaks are reduced to exactly one
/// blank line.
///
/// The transform is idempotent.
///
/// # Examples
///
/// ```
/// use nyay_verdicts::sanitize;
///
/// assert_eq!(sanitize("----,,,,Some Court Name"), "Some Court Name");
/// assert_eq!(sanitize("Delhi HC---Bail granted"), "Delhi HC Bail granted");
/// assert_eq!(sanitize("a  b\r\nc"), "a b\nc");
/// ```
pub fn sanitize(raw: &str) -> String {
    let text = INVISIBLE_CHARS.replace_all(raw, "");
    let mut text = text.replace("\r\n", "\n").replace('\r', "\n");

    // Deleting dots can join dashes into a new run ("-...-" -> "--").
    while PUNCTUATION_RUN.is_match(&text) || DOT_RUN.is_match(&text) {
        text = PUNCTUATION_RUN.replace_all(&text, " ").into_owned();
        text = DOT_RUN.replace_all(&text, "").into_owned();
    }

    let text = SPACE_RUN.replace_all(&text, " ");
    let text = SPACE_AROUND_NEWLINE.replace_all(&text, "\n");
    let text = BLANK_LINE_RUN.replace_all(&text, "\n\n");

    text.trim().to_string()
}

/// [`sanitize`] for optional input: `None` is returned unchanged
pub fn sanitize_opt(raw: Option<&str>) -> Option<String> {
    raw.map(sanitize)
}
