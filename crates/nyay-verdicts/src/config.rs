//! Configuration for the verdict parser

use nyay_domain::DEFAULT_CASE_NAME_MAX_CHARS;
use serde::{Deserialize, Serialize};

/// A structured extraction strategy that can be enabled in the pipeline
///
/// The singleton fallback is not listed here: it always runs last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Markdown table with a `Case Name` header
    Table,
    /// `**Label:** value` blocks
    BoldFields,
    /// Blank-line separated paragraphs
    Paragraphs,
}

impl StrategyKind {
    /// Stable name used in logs and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Table => "table",
            StrategyKind::BoldFields => "bold_fields",
            StrategyKind::Paragraphs => "paragraphs",
        }
    }
}

/// Configuration for the verdict parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum length (characters) of a case name taken from a paragraph's first line
    pub case_name_max_chars: usize,

    /// Structured strategies to try, most specific first
    pub strategies: Vec<StrategyKind>,
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.case_name_max_chars == 0 {
            return Err("case_name_max_chars must be greater than 0".to_string());
        }
        for (idx, kind) in self.strategies.iter().enumerate() {
            if self.strategies[..idx].contains(kind) {
                return Err(format!("strategy '{}' listed more than once", kind.as_str()));
            }
        }
        Ok(())
    }

    /// Structured-only preset: never split loose prose on blank lines
    pub fn structured_only() -> Self {
        Self {
            strategies: vec![StrategyKind::Table, StrategyKind::BoldFields],
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ParserConfig {
    /// Table, then bold fields, then paragraphs
    fn default() -> Self {
        Self {
            case_name_max_chars: DEFAULT_CASE_NAME_MAX_CHARS,
            strategies: vec![
                StrategyKind::Table,
                StrategyKind::BoldFields,
                StrategyKind::Paragraphs,
            ],
        }
    }
}
