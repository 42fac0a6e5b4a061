//! Error types for the document algebra.
//!
//! Validation is the only construction step that can fail as a value. Each
//! interpreter decides whether that failure stays a value, collapses the run
//! to `None`, or short-circuits it as an `Err`.

use thiserror::Error;

/// Why a document failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The document holds nothing at all.
    #[error("document is empty")]
    Empty,
}
