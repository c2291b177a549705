//! Nyay Saathi Text Generation Layer
//!
//! Implementations of the `TextGenerator` trait from `nyay-domain`.
//!
//! # Providers
//!
//! - `MockGenerator`: Deterministic mock for testing and offline use
//!
//! The hosted generative-language API (with its retry/backoff loop) sits
//! outside this workspace and plugs in behind the same trait.
//!
//! # Examples
//!
//! ```
//! use nyay_domain::{GenerationRequest, TextGenerator};
//! use nyay_llm::MockGenerator;
//!
//! let generator = MockGenerator::new("Hello from the model!");
//! let output = generator.generate(&GenerationRequest::new("any query", "prompt")).unwrap();
//! assert_eq!(output.text, "Hello from the model!");
//! ```

#![warn(missing_docs)]

use nyay_domain::{GenerationOutput, GenerationRequest, Source, TextGenerator};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while generating text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response arrived but carried no usable content
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Generator is missing credentials or an endpoint
    #[error("Generator not configured: {0}")]
    NotConfigured(String),

    /// Generic error
    #[error("Generator error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Output(GenerationOutput),
    Error(GeneratorError),
}

/// Mock text generator for deterministic testing
///
/// Returns pre-configured outputs without making any network calls. Replies
/// are keyed on the request's user query.
///
/// # Examples
///
/// ```
/// use nyay_domain::{GenerationRequest, TextGenerator};
/// use nyay_llm::MockGenerator;
///
/// let mut generator = MockGenerator::default();
/// generator.add_response("query1", "response1");
/// generator.add_response("query2", "response2");
///
/// let request = GenerationRequest::new("query1", "system");
/// assert_eq!(generator.generate(&request).unwrap().text, "response1");
/// ```
#[derive(Debug, Clone)]
pub struct MockGenerator {
    default_output: GenerationOutput,
    replies: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockGenerator {
    /// Create a new MockGenerator with a fixed text for all queries
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_output(GenerationOutput::text_only(text))
    }

    /// Create a new MockGenerator with a fixed output (text and sources)
    pub fn with_output(output: GenerationOutput) -> Self {
        Self {
            default_output: output,
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Add a specific text reply for a given query
    pub fn add_response(&mut self, query: impl Into<String>, text: impl Into<String>) {
        self.replies()
            .insert(query.into(), MockReply::Output(GenerationOutput::text_only(text)));
    }

    /// Add a reply with sources for a given query
    pub fn add_response_with_sources(
        &mut self,
        query: impl Into<String>,
        text: impl Into<String>,
        sources: Vec<Source>,
    ) {
        let output = GenerationOutput {
            text: text.into(),
            sources,
        };
        self.replies().insert(query.into(), MockReply::Output(output));
    }

    /// Configure to fail with `error` for a specific query
    pub fn add_error(&mut self, query: impl Into<String>, error: GeneratorError) {
        self.replies().insert(query.into(), MockReply::Error(error));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    fn replies(&self) -> MutexGuard<'_, HashMap<String, MockReply>> {
        // A poisoned map still holds valid replies.
        self.replies.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl TextGenerator for MockGenerator {
    type Error = GeneratorError;

    fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        debug!(
            query = %request.user_query,
            grounding = request.use_grounding,
            "Mock generation"
        );

        match self.replies().get(&request.user_query) {
            Some(MockReply::Output(output)) => Ok(output.clone()),
            Some(MockReply::Error(error)) => Err(error.clone()),
            None => Ok(self.default_output.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &str) -> GenerationRequest {
        GenerationRequest::new(query, "system")
    }

    #[test]
    fn test_mock_generator_default() {
        let generator = MockGenerator::new("Test response");
        let result = generator.generate(&request("any query"));
        assert!(result.is_ok());
        assert_eq!(result.unwrap().text, "Test response");
    }

    #[test]
    fn test_mock_generator_specific_responses() {
        let mut generator = MockGenerator::default();
        generator.add_response("hello", "world");
        generator.add_response("foo", "bar");

        assert_eq!(generator.generate(&request("hello")).unwrap().text, "world");
        assert_eq!(generator.generate(&request("foo")).unwrap().text, "bar");
        assert_eq!(
            generator.generate(&request("unknown")).unwrap().text,
            "Default mock response"
        );
    }

    #[test]
    fn test_mock_generator_sources_pass_through() {
        let mut generator = MockGenerator::default();
        let sources = vec![Source::new("https://example.org/sc", "Supreme Court")];
        generator.add_response_with_sources("verdicts", "text", sources.clone());

        let output = generator.generate(&request("verdicts")).unwrap();
        assert_eq!(output.sources, sources);
    }

    #[test]
    fn test_mock_generator_call_count() {
        let generator = MockGenerator::new("test");

        assert_eq!(generator.call_count(), 0);

        generator.generate(&request("q1")).unwrap();
        assert_eq!(generator.call_count(), 1);

        generator.generate(&request("q2")).unwrap();
        assert_eq!(generator.call_count(), 2);

        generator.reset_call_count();
        assert_eq!(generator.call_count(), 0);
    }

    #[test]
    fn test_mock_generator_error() {
        let mut generator = MockGenerator::default();
        generator.add_error("bad query", GeneratorError::RateLimitExceeded);

        let result = generator.generate(&request("bad query"));
        assert_eq!(result.unwrap_err(), GeneratorError::RateLimitExceeded);
    }

    #[test]
    fn test_mock_generator_clone_shares_state() {
        let generator1 = MockGenerator::new("test");
        let generator2 = generator1.clone();

        generator1.generate(&request("test")).unwrap();

        // Both share the same call count due to Arc
        assert_eq!(generator1.call_count(), 1);
        assert_eq!(generator2.call_count(), 1);
    }
}
