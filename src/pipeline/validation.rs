//! Validation engine for preprocessing specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`PreprocessSpec`] and collects every diagnostic into a
//! [`ValidationReport`]. It never short-circuits on the first error, so users
//! see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_textprep::pipeline::validation::ValidationEngine;
//! use rapid_textprep::TransformRegistry;
//!
//! let engine = ValidationEngine::for_registry(TransformRegistry::builtin());
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::PipelineSpecError;
use super::spec::{PreprocessSpec, SPEC_VERSION};
use crate::registry::TransformRegistry;
use crate::transforms::TransformDomain;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding: an error or warning attached to a
/// [`PipelineSpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: PipelineSpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: PipelineSpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: PipelineSpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`PreprocessSpec`] and returns
/// zero or more diagnostics.
///
/// Rules must be `Send + Sync` so they can be shared across threads (e.g.,
/// in a long-lived validation engine).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"runtime_limits"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &PreprocessSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`PreprocessSpec`] and
/// collects all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the registry-independent rule set.
    ///
    /// Transform names are not checked; [`Preprocessor::run`](super::runner::Preprocessor::run)
    /// rejects unknown names itself.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(RuntimeLimitsRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine.add_rule(Box::new(EmptyPipelineRule));
        engine
    }

    /// Default rules plus the rules that need to know the registry:
    /// unknown transform names and deferred token transforms.
    pub fn for_registry(registry: &TransformRegistry) -> Self {
        let mut engine = Self::with_defaults();
        engine.add_rule(Box::new(UnknownTransformsRule {
            available: registry.available(),
        }));
        engine.add_rule(Box::new(DeferredTokenTransformsRule::from_registry(registry)));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &PreprocessSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

/// JSON pointer for the source of the resolved transform list.
fn transforms_path(spec: &PreprocessSpec) -> &'static str {
    if spec.transforms.is_none() && spec.preset.is_some() {
        "/preset"
    } else {
        "/transforms"
    }
}

// ─── 1. Spec version must be supported ─────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &PreprocessSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            PipelineSpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Runtime limits must be positive when set ────────────────────────────

struct RuntimeLimitsRule;

impl ValidationRule for RuntimeLimitsRule {
    fn name(&self) -> &str {
        "runtime_limits"
    }

    fn validate(&self, spec: &PreprocessSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        if spec.runtime.max_threads == Some(0) {
            out.push(ValidationDiagnostic::error(
                PipelineSpecError::new(
                    ErrorCode::InvalidValue,
                    "/runtime/max_threads",
                    "max_threads must be greater than 0",
                )
                .with_hint("Remove max_threads to use all cores, or set it to a positive value"),
            ));
        }

        if spec.runtime.single_thread && spec.runtime.max_threads.is_some() {
            out.push(ValidationDiagnostic::warning(
                PipelineSpecError::new(
                    ErrorCode::InvalidValue,
                    "/runtime/max_threads",
                    "max_threads is ignored when single_thread is true",
                )
                .with_hint("Remove one of max_threads or single_thread"),
            ));
        }

        out
    }
}

// ─── 3. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &std::collections::HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    PipelineSpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &PreprocessSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/runtime",
            &spec.runtime.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ─── 4. Empty pipeline skips preprocessing ──────────────────────────────────

struct EmptyPipelineRule;

impl ValidationRule for EmptyPipelineRule {
    fn name(&self) -> &str {
        "empty_pipeline"
    }

    fn validate(&self, spec: &PreprocessSpec) -> Vec<ValidationDiagnostic> {
        if !spec.resolve_transforms().is_empty() {
            return vec![];
        }
        vec![ValidationDiagnostic::warning(
            PipelineSpecError::new(
                ErrorCode::EmptyPipeline,
                transforms_path(spec),
                "no transforms requested; preprocessing will be skipped",
            )
            .with_hint("Add transform names or choose a preset"),
        )]
    }
}

// ─── 5. Every transform name must be registered ─────────────────────────────

struct UnknownTransformsRule {
    available: BTreeSet<String>,
}

impl ValidationRule for UnknownTransformsRule {
    fn name(&self) -> &str {
        "unknown_transforms"
    }

    fn validate(&self, spec: &PreprocessSpec) -> Vec<ValidationDiagnostic> {
        let base = transforms_path(spec);
        let hint = format!(
            "Available transforms: {}",
            self.available
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let names = spec.resolve_transforms();
        names
            .iter()
            .enumerate()
            .filter(|(_, name)| !self.available.contains(*name))
            .map(|(idx, name)| {
                ValidationDiagnostic::error(
                    PipelineSpecError::new(
                        ErrorCode::UnknownTransform,
                        format!("{base}/{idx}"),
                        format!("unknown transform \"{name}\""),
                    )
                    .with_hint(hint.clone()),
                )
            })
            .collect()
    }
}

// ─── 6. Token transforms are deferred past later string transforms ──────────

struct DeferredTokenTransformsRule {
    token_names: BTreeSet<String>,
}

impl DeferredTokenTransformsRule {
    fn from_registry(registry: &TransformRegistry) -> Self {
        Self {
            token_names: registry
                .iter()
                .filter(|t| t.domain() == TransformDomain::Tokens)
                .map(|t| t.name().to_string())
                .collect(),
        }
    }
}

impl ValidationRule for DeferredTokenTransformsRule {
    fn name(&self) -> &str {
        "deferred_token_transforms"
    }

    fn validate(&self, spec: &PreprocessSpec) -> Vec<ValidationDiagnostic> {
        let names = spec.resolve_transforms();
        let Some(first_token) = names.iter().position(|n| self.token_names.contains(n)) else {
            return vec![];
        };

        let base = transforms_path(spec);
        names
            .iter()
            .enumerate()
            .skip(first_token + 1)
            .filter(|(_, name)| !self.token_names.contains(*name))
            .map(|(idx, name)| {
                ValidationDiagnostic::warning(
                    PipelineSpecError::new(
                        ErrorCode::ReorderedTransforms,
                        format!("{base}/{idx}"),
                        format!(
                            "\"{name}\" will run before \"{}\": token transforms always run \
                             after all string transforms",
                            names[first_token]
                        ),
                    )
                    .with_hint("List string transforms before token transforms"),
                )
            })
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build a PreprocessSpec from JSON.
    fn spec(json: &str) -> PreprocessSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::for_registry(TransformRegistry::builtin())
    }

    // ─── Valid specs ────────────────────────────────────────────────────

    #[test]
    fn test_explicit_transforms_are_valid() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "transforms": ["to_lowercase", "lemmatize"] }"#,
        ));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in ["tweets", "yahoo_answers"] {
            let report = engine().validate(&spec(&format!(r#"{{ "v": 1, "preset": "{preset}" }}"#)));
            assert!(report.is_empty(), "{preset}: {:?}", report.diagnostics);
        }
    }

    // ─── Errors ─────────────────────────────────────────────────────────

    #[test]
    fn test_unsupported_version() {
        let report = engine().validate(&spec(r#"{ "v": 2, "transforms": ["to_lowercase"] }"#));
        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::UnsupportedVersion);
        assert_eq!(err.path, "/v");
    }

    #[test]
    fn test_every_unknown_transform_reported() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "transforms": ["lowercase_typo", "another_typo", "to_lowercase"] }"#,
        ));
        let paths: Vec<&str> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/transforms/0", "/transforms/1"]);
        assert!(report
            .errors()
            .all(|e| e.code == ErrorCode::UnknownTransform));
    }

    #[test]
    fn test_zero_max_threads() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "transforms": ["to_lowercase"], "runtime": { "max_threads": 0 } }"#,
        ));
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidValue);
        assert_eq!(err.path, "/runtime/max_threads");
    }

    #[test]
    fn test_unknown_fields_strict_is_error() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "transforms": ["to_lowercase"], "strict": true, "bogus": 1 }"#,
        ));
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::UnknownField);
        assert_eq!(err.path, "/bogus");
    }

    // ─── Warnings ───────────────────────────────────────────────────────

    #[test]
    fn test_unknown_fields_lenient_is_warning() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "transforms": ["to_lowercase"], "runtime": { "threads": 4 } }"#,
        ));
        assert!(report.is_valid());
        let warn = report.warnings().next().unwrap();
        assert_eq!(warn.path, "/runtime/threads");
    }

    #[test]
    fn test_empty_pipeline_warning() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        let warn = report.warnings().next().unwrap();
        assert_eq!(warn.code, ErrorCode::EmptyPipeline);
        assert_eq!(warn.path, "/transforms");
    }

    #[test]
    fn test_interleaved_transforms_warn() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "transforms": ["lemmatize", "to_lowercase", "remove_english_stop_words", "remove_url"] }"#,
        ));
        assert!(report.is_valid());
        let paths: Vec<&str> = report
            .warnings()
            .filter(|w| w.code == ErrorCode::ReorderedTransforms)
            .map(|w| w.path.as_str())
            .collect();
        assert_eq!(paths, vec!["/transforms/1", "/transforms/3"]);
    }

    #[test]
    fn test_single_thread_with_max_threads_warns() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "transforms": ["to_lowercase"], "runtime": { "max_threads": 4, "single_thread": true } }"#,
        ));
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_defaults_skip_registry_rules() {
        let report = ValidationEngine::with_defaults().validate(&spec(
            r#"{ "v": 1, "transforms": ["lowercase_typo"] }"#,
        ));
        assert!(report.is_empty());
        assert!(!ValidationEngine::with_defaults()
            .rule_names()
            .contains(&"unknown_transforms"));
    }

    #[test]
    fn test_report_serializes_with_severity() {
        let report = engine().validate(&spec(r#"{ "v": 3, "transforms": ["to_lowercase"] }"#));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["diagnostics"][0]["severity"], "error");
        assert_eq!(value["diagnostics"][0]["code"], "unsupported_version");
    }
}
