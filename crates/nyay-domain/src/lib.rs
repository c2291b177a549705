//! Nyay Saathi Domain Layer
//!
//! Core value types shared by every other crate in the workspace. The only
//! external dependency is `serde`, because verdict records are handed to the
//! rendering layer as JSON.
//!
//! ## Key Concepts
//!
//! - **VerdictRecord**: one structured court verdict (case name, court, date, summary)
//! - **Source**: a citation link returned alongside model output
//! - **GenerationOutput**: the `{ text, sources }` pair a text generator produces
//! - **TextGenerator**: the boundary trait for the upstream language-model call
//!
//! ## Architecture
//!
//! - Pure value types and trait definitions only
//! - Infrastructure implementations live in other crates
//! - Fallback defaults are named constants in [`verdict`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod source;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use source::{GenerationOutput, GenerationRequest, Source, VerdictsResponse};
pub use traits::TextGenerator;
pub use verdict::{
    clean_field, placeholder_case_name, VerdictRecord, DEFAULT_CASE_NAME_MAX_CHARS,
    NOT_AVAILABLE, SINGLETON_CASE_NAME,
};
