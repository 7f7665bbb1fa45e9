//! Stable, machine-readable error codes for spec diagnostics.
//!
//! Codes serialize as `snake_case` strings and never change meaning once
//! published, so callers can match on them instead of parsing messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable error code attached to every [`PipelineSpecError`](super::errors::PipelineSpecError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A transform name is not in the registry.
    UnknownTransform,
    /// The spec version is not supported.
    UnsupportedVersion,
    /// A field holds a value outside its allowed range.
    InvalidValue,
    /// The spec contains a field the schema does not know.
    UnknownField,
    /// The spec resolves to no transforms at all.
    EmptyPipeline,
    /// Token transforms will run after string transforms listed later.
    ReorderedTransforms,
    /// Catch-all for a spec that failed validation.
    ValidationFailed,
}

impl ErrorCode {
    /// Returns the user-facing `snake_case` name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownTransform => "unknown_transform",
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidValue => "invalid_value",
            Self::UnknownField => "unknown_field",
            Self::EmptyPipeline => "empty_pipeline",
            Self::ReorderedTransforms => "reordered_transforms",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde() {
        for code in [
            ErrorCode::UnknownTransform,
            ErrorCode::UnsupportedVersion,
            ErrorCode::InvalidValue,
            ErrorCode::UnknownField,
            ErrorCode::EmptyPipeline,
            ErrorCode::ReorderedTransforms,
            ErrorCode::ValidationFailed,
        ] {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, code.to_string());
        }
    }
}
