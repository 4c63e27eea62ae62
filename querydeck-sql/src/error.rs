//! Error types for the boundary of the analysis crate.
//!
//! The scanners themselves never fail; only parsing caller input does.

use thiserror::Error;

/// Errors raised when turning caller-supplied text into typed inputs.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unknown quick action: {0}")]
    UnknownQuickAction(String),

    #[error("unknown parameter type: {0}")]
    UnknownParameterType(String),

    #[error("invalid value for parameter {name}: expected {expected}, got {input:?}")]
    InvalidValue {
        name: String,
        expected: &'static str,
        input: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
