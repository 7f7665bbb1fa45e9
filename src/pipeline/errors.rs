//! Structured diagnostics for preprocessing specs.
//!
//! [`PipelineSpecError`] describes a problem found while validating a
//! [`PreprocessSpec`](super::spec::PreprocessSpec) before any document is
//! touched. It carries a stable [`ErrorCode`] for programmatic matching, a
//! JSON pointer `path` locating the problem in the spec, a human-readable
//! `message`, and an optional `hint` suggesting a fix.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error_code::ErrorCode;

/// A validation error found in a preprocessing spec.
///
/// # Display format
///
/// ```text
/// [unknown_transform] /transforms/1: unknown transform "lowercase_typo"
/// ```
///
/// # JSON format
///
/// ```json
/// {
///   "code": "unknown_transform",
///   "path": "/transforms/1",
///   "message": "unknown transform \"lowercase_typo\"",
///   "hint": "Available transforms: lemmatize, ..."
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("[{code}] {path}: {message}")]
pub struct PipelineSpecError {
    /// Stable error code for programmatic matching.
    pub code: ErrorCode,

    /// JSON pointer into the spec identifying the problematic location.
    ///
    /// Examples: `"/transforms/2"`, `"/runtime/max_threads"`, `""` (root).
    pub path: String,

    /// Human-readable description of the problem.
    pub message: String,

    /// Optional suggestion for how to fix the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PipelineSpecError {
    /// Create a new spec error.
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a hint suggesting how to fix the problem.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
