//! Nyay Saathi Verdict Parser
//!
//! Turns loosely structured language-model output into a reliable list of
//! court verdict records.
//!
//! # Overview
//!
//! Model answers arrive in whatever layout the model chose: a markdown table,
//! numbered `**Label:** value` blocks, loose paragraphs, or a single sentence.
//! The parser sanitizes the text and then tries one structural hypothesis at a
//! time, most specific first. The first hypothesis that fits produces the
//! output.
//!
//! # Architecture
//!
//! ```text
//! raw text → sanitize → table? → bold fields? → paragraphs? → singleton
//! ```
//!
//! # Key Features
//!
//! - **Total**: non-blank input always yields at least one record
//! - **Complete records**: every field is a string, defaults are `"N/A"` and `"Verdict {n}"`
//! - **Deterministic**: same input, same output; no state between calls
//! - **Configurable order**: structured strategies can be reordered or disabled
//!
//! # Example Usage
//!
//! ```
//! use nyay_verdicts::parse_verdicts;
//!
//! let text = "| Case Name | Date | Court | Summary |\n\
//!             |---|---|---|---|\n\
//!             | State vs. Sharma | 2024-01-10 | Delhi HC | Bail granted |";
//!
//! let records = parse_verdicts(text);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].case_name, "State vs. Sharma");
//! assert_eq!(records[0].court, "Delhi HC");
//! ```

#![warn(missing_docs)]

mod bold;
mod config;
mod error;
mod fallback;
mod feed;
mod paragraph;
mod parser;
mod prompt;
mod sanitizer;
mod strategy;
mod table;

#[cfg(test)]
mod tests;

pub use bold::{try_parse_bold_fields, BoldFieldStrategy};
pub use config::{ParserConfig, StrategyKind};
pub use error::VerdictError;
pub use fallback::{wrap_whole, SingletonStrategy};
pub use feed::VerdictFeed;
pub use paragraph::{try_parse_paragraphs, ParagraphStrategy};
pub use parser::{parse_verdicts, VerdictParser};
pub use prompt::{recent_verdicts_request, RECENT_VERDICTS_QUERY, RECENT_VERDICTS_SYSTEM_PROMPT};
pub use sanitizer::{sanitize, sanitize_opt};
pub use strategy::VerdictStrategy;
pub use table::{try_parse_table, TableStrategy};
