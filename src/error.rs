// src/error.rs
//! Application error types for the diagnostic surface.
//!
//! The document core never fails on its own; these variants describe what
//! can go wrong around it: bad command-line input, leaf values that do not
//! parse, validation rejected at the boundary, and output plumbing.

use crate::algebras::DocumentError;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No leaf values were given")]
    MissingValues,

    #[error("Invalid arrangement: {0}")]
    InvalidArrangement(String),

    #[error("Unknown interpreter '{0}' (expected pure, optional or strict)")]
    UnknownInterpreter(String),

    #[error("Unknown build style '{0}' (expected staged or direct)")]
    UnknownStyle(String),

    #[error("Leaf value '{value}' is not a number: {source}")]
    LeafParse {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("Document rejected: {0}")]
    Rejected(#[from] DocumentError),

    #[error("Interpreter '{interpreter}' produced no document")]
    NoResult { interpreter: String },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
