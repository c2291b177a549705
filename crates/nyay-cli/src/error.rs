//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the `nyay` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Verdict pipeline error
    #[error("Verdict error: {0}")]
    Verdict(#[from] nyay_verdicts::VerdictError),

    /// Reading input or writing the config file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The config file is not valid TOML
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Missing or conflicting input options
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
