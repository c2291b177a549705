//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the parsing core and
//! infrastructure. Implementations live in other crates.

use crate::source::{GenerationOutput, GenerationRequest};
use std::fmt::Display;

/// Trait for the upstream language-model call
///
/// Implemented by the infrastructure layer (nyay-llm). Retry and backoff are
/// the implementation's concern; callers receive one resolved output or an
/// error once attempts are exhausted.
pub trait TextGenerator {
    /// Error type for generation operations
    type Error: Display;

    /// Generate text for a request
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput, Self::Error>;
}
