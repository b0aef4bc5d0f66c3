//! Code generation errors.

use std::fmt;

use thiserror::Error;

/// Code generation error.
#[derive(Debug, Error)]
pub enum GenError {
    /// The requested scanner function name is not a C identifier.
    #[error("invalid function name '{0}': expected a C identifier")]
    InvalidName(String),

    /// Unknown `--format` value.
    #[error("unknown output format '{0}' (expected 'c' or 'json')")]
    UnknownFormat(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("formatting failed")]
    Format(#[from] fmt::Error),
}

/// Result type for code generation.
pub type GenResult<T> = Result<T, GenError>;
