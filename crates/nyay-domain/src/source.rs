//! Upstream generation contract and the payload handed to renderers

use crate::verdict::VerdictRecord;
use serde::{Deserialize, Serialize};

/// A citation returned alongside grounded model output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Link to the cited page
    pub uri: String,

    /// Human-readable title of the cited page
    pub title: String,
}

impl Source {
    /// Create a new source
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}

/// A single request to the upstream text generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// The user-facing query
    pub user_query: String,

    /// System instruction framing the model's role
    pub system_prompt: String,

    /// Whether the model should ground its answer in web search results
    pub use_grounding: bool,
}

impl GenerationRequest {
    /// Create a request without grounding
    pub fn new(user_query: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            user_query: user_query.into(),
            system_prompt: system_prompt.into(),
            use_grounding: false,
        }
    }

    /// Enable or disable search grounding
    pub fn with_grounding(mut self, use_grounding: bool) -> Self {
        self.use_grounding = use_grounding;
        self
    }
}

/// What the upstream text generator returns
///
/// Only `text` is interpreted by the verdict parser; `sources` is passed
/// through to the caller untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutput {
    /// Free-form model output
    pub text: String,

    /// Citations, empty when grounding was off
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl GenerationOutput {
    /// Output with text and no sources
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }
}

/// Parsed verdicts plus the citations they came with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictsResponse {
    /// Structured records, in output order
    pub verdicts: Vec<VerdictRecord>,

    /// Citations from the generator, unmodified
    #[serde(default)]
    pub sources: Vec<Source>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_output_without_sources() {
        let output: GenerationOutput = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(output.text, "hello");
        assert!(output.sources.is_empty());
    }

    #[test]
    fn test_generation_output_with_sources() {
        let json = r#"{
            "text": "hello",
            "sources": [{"uri": "https://example.org/a", "title": "A"}]
        }"#;
        let output: GenerationOutput = serde_json::from_str(json).unwrap();
        assert_eq!(output.sources, vec![Source::new("https://example.org/a", "A")]);
    }

    #[test]
    fn test_request_builder() {
        let request = GenerationRequest::new("query", "prompt").with_grounding(true);
        assert_eq!(request.user_query, "query");
        assert!(request.use_grounding);
    }
}
