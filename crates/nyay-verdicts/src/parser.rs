//! The verdict parsing pipeline

use crate::bold::BoldFieldStrategy;
use crate::config::{ParserConfig, StrategyKind};
use crate::error::VerdictError;
use crate::fallback::SingletonStrategy;
use crate::paragraph::ParagraphStrategy;
use crate::sanitizer::sanitize;
use crate::strategy::VerdictStrategy;
use crate::table::TableStrategy;
use nyay_domain::{GenerationOutput, Source, VerdictRecord, VerdictsResponse};
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT_PARSER: LazyLock<VerdictParser> = LazyLock::new(VerdictParser::default);

/// Parse model output into verdict records with the default strategy order
///
/// Returns an empty list for blank input and at least one record otherwise.
///
/// # Examples
///
/// ```
/// use nyay_verdicts::parse_verdicts;
///
/// let records = parse_verdicts("Just a single unstructured sentence about a case.");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].case_name, "Recent Verdicts");
/// assert!(parse_verdicts("   ").is_empty());
/// ```
pub fn parse_verdicts(text: &str) -> Vec<VerdictRecord> {
    DEFAULT_PARSER.parse(text)
}

/// Ordered cascade of strategies ending in the singleton fallback
///
/// The first strategy whose precondition holds produces the final output;
/// strategies are never combined. Parsing is pure and a parser can be shared
/// across threads.
pub struct VerdictParser {
    strategies: Vec<Box<dyn VerdictStrategy>>,
}

impl VerdictParser {
    /// Build a parser from a validated configuration
    pub fn new(config: ParserConfig) -> Result<Self, VerdictError> {
        config.validate().map_err(VerdictError::Config)?;
        Ok(Self::from_config(&config))
    }

    fn from_config(config: &ParserConfig) -> Self {
        let mut strategies: Vec<Box<dyn VerdictStrategy>> = config
            .strategies
            .iter()
            .map(|kind| -> Box<dyn VerdictStrategy> {
                match kind {
                    StrategyKind::Table => Box::new(TableStrategy),
                    StrategyKind::BoldFields => Box::new(BoldFieldStrategy),
                    StrategyKind::Paragraphs => {
                        Box::new(ParagraphStrategy::new(config.case_name_max_chars))
                    }
                }
            })
            .collect();
        strategies.push(Box::new(SingletonStrategy));

        Self { strategies }
    }

    /// Names of the strategies in the order they are tried
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Sanitize `raw` and run it through the cascade
    pub fn parse(&self, raw: &str) -> Vec<VerdictRecord> {
        let cleaned = sanitize(raw);
        if cleaned.is_empty() {
            debug!("Empty input after sanitizing, no verdicts");
            return Vec::new();
        }

        for strategy in &self.strategies {
            if let Some(records) = strategy.try_parse(&cleaned) {
                debug!(
                    strategy = strategy.name(),
                    records = records.len(),
                    "Parsed verdicts"
                );
                return records;
            }
        }

        // The singleton strategy matches all non-empty text.
        Vec::new()
    }

    /// Parse an untyped JSON value
    ///
    /// A string is parsed directly and an object is parsed from its `text`
    /// field. Anything else counts as empty input.
    pub fn parse_value(&self, value: &Value) -> Vec<VerdictRecord> {
        match text_of(value) {
            Some(text) => self.parse(text),
            None => {
                debug!("Input is not text, treating as empty");
                Vec::new()
            }
        }
    }

    /// Parse generator output, passing its sources through untouched
    pub fn parse_output(&self, output: GenerationOutput) -> VerdictsResponse {
        VerdictsResponse {
            verdicts: self.parse(&output.text),
            sources: output.sources,
        }
    }

    /// Parse an upstream `{ "text": ..., "sources": [...] }` JSON document
    ///
    /// Fails only when the document is not JSON or its `sources` are malformed;
    /// a missing or non-string `text` yields no verdicts.
    pub fn parse_document(&self, json: &str) -> Result<VerdictsResponse, VerdictError> {
        let value: Value = serde_json::from_str(json)?;
        let sources = match value.get("sources") {
            Some(Value::Null) | None => Vec::new(),
            Some(sources) => serde_json::from_value::<Vec<Source>>(sources.clone())?,
        };

        Ok(VerdictsResponse {
            verdicts: self.parse_value(&value),
            sources,
        })
    }
}

impl Default for VerdictParser {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}

fn text_of(value: &Value) -> Option<&str> {
    match value {
        Value::String(text) => Some(text.as_str()),
        Value::Object(map) => map.get("text").and_then(Value::as_str),
        _ => None,
    }
}
