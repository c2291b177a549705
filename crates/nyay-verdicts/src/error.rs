//! Error types for the verdict pipeline
//!
//! Parsing itself never fails; these cover the surrounding plumbing.

use thiserror::Error;

/// Errors that can occur around verdict parsing
#[derive(Error, Debug)]
pub enum VerdictError {
    /// Upstream text generator failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// Parser configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream JSON document could not be read
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for VerdictError {
    fn from(e: serde_json::Error) -> Self {
        VerdictError::JsonParse(e.to_string())
    }
}
