//! Error types for rapid_textprep
//!
//! This module defines the error types used throughout the library.
//! Validation errors are raised before any document is processed; execution
//! errors abort the whole batch.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::pipeline::errors::PipelineSpecError;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PrepError>;

/// Main error type for rapid_textprep
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepError {
    /// One or more requested transform names are not in the registry.
    /// Carries every unresolved name, not just the first.
    #[error("Unknown transforms: {}", join_names(.names))]
    UnknownTransform { names: BTreeSet<String> },

    /// A transform failed while processing a single document
    #[error("Transform '{transform}' failed on document {document}: {message}")]
    WorkerExecution {
        document: usize,
        transform: String,
        message: String,
    },

    /// A preprocessing spec failed validation
    #[error("Invalid spec: {}", join_spec_errors(.errors))]
    InvalidSpec { errors: Vec<PipelineSpecError> },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

fn join_names(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn join_spec_errors(errors: &[PipelineSpecError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl PrepError {
    /// Create an unknown transform error from any collection of names
    pub fn unknown_transforms<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownTransform {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a worker execution error
    pub fn worker_execution(
        document: usize,
        transform: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::WorkerExecution {
            document,
            transform: transform.into(),
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Names that failed registry validation, if this is an unknown transform error
    pub fn unknown_names(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::UnknownTransform { names } => Some(names),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PrepError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::error_code::ErrorCode;

    #[test]
    fn test_error_display() {
        let err = PrepError::unknown_transforms(["lowercase_typo", "another_typo"]);
        assert_eq!(
            err.to_string(),
            "Unknown transforms: another_typo, lowercase_typo"
        );

        let err = PrepError::worker_execution(3, "remove_url", "boom");
        assert!(err.to_string().contains("document 3"));
        assert!(err.to_string().contains("remove_url"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_unknown_names() {
        let err = PrepError::unknown_transforms(["a", "b", "a"]);
        let names = err.unknown_names().unwrap();
        assert_eq!(names.len(), 2);

        let err = PrepError::invalid_config("test");
        assert!(err.unknown_names().is_none());
    }

    #[test]
    fn test_invalid_spec_display() {
        let err = PrepError::InvalidSpec {
            errors: vec![PipelineSpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                "unsupported spec version 2",
            )],
        };
        assert_eq!(
            err.to_string(),
            "Invalid spec: [unsupported_version] /v: unsupported spec version 2"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: PrepError = parse.unwrap_err().into();
        assert!(matches!(err, PrepError::Serialization { .. }));
    }
}
