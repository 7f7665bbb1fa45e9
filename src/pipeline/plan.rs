//! Pipeline planning: validate a transform-name list and partition it.
//!
//! A [`PipelinePlan`] is built once per batch from the caller's ordered list
//! of names. Every name is checked against the registry first, collecting
//! all unresolved names into a single [`PrepError::UnknownTransform`]. Valid
//! names are then split by domain, keeping their relative order:
//!
//! ```text
//! names:        [a, lemmatize, b, remove_english_stop_words]
//! string steps: [a, b]
//! token steps:  __tokenize → lemmatize → remove_english_stop_words → __rejoin
//! ```
//!
//! All token-domain transforms therefore run after all string-domain ones,
//! even when the caller interleaved them. The plan keeps this reordering and
//! reports it through [`PipelinePlan::is_reordered`].

use std::collections::BTreeSet;

use crate::errors::{PrepError, Result};
use crate::registry::TransformRegistry;
use crate::transforms::{Transform, TransformDomain};

/// Name of the implicit step that splits a string into tokens.
pub const TOKENIZE_STEP: &str = "__tokenize";

/// Name of the implicit step that joins tokens back into a string.
pub const REJOIN_STEP: &str = "__rejoin";

/// Validated, partitioned, immutable set of transforms for one batch.
#[derive(Debug, Clone, Default)]
pub struct PipelinePlan<'r> {
    string_steps: Vec<&'r Transform>,
    token_steps: Vec<&'r Transform>,
    reordered: bool,
}

impl<'r> PipelinePlan<'r> {
    /// Validate `names` against `registry` and partition them by domain.
    ///
    /// # Errors
    ///
    /// [`PrepError::UnknownTransform`] listing every name that is not an
    /// available transform. Nothing is partitioned in that case.
    pub fn build<S: AsRef<str>>(names: &[S], registry: &'r TransformRegistry) -> Result<Self> {
        let unknown: BTreeSet<String> = names
            .iter()
            .map(|name| name.as_ref())
            .filter(|name| !registry.is_available(name))
            .map(str::to_owned)
            .collect();
        if !unknown.is_empty() {
            return Err(PrepError::UnknownTransform { names: unknown });
        }

        let mut plan = Self::default();
        for name in names {
            let Some(transform) = registry.get_public(name.as_ref()) else {
                // Unreachable after validation above.
                return Err(PrepError::unknown_transforms([name.as_ref()]));
            };
            match transform.domain() {
                TransformDomain::Tokens => plan.token_steps.push(transform),
                TransformDomain::Text => {
                    if !plan.token_steps.is_empty() {
                        plan.reordered = true;
                    }
                    plan.string_steps.push(transform);
                }
            }
        }
        Ok(plan)
    }

    /// An empty plan: documents pass through unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// String-domain transforms, in application order
    pub fn string_steps(&self) -> &[&'r Transform] {
        &self.string_steps
    }

    /// Token-domain transforms, in application order (without boundaries)
    pub fn token_steps(&self) -> &[&'r Transform] {
        &self.token_steps
    }

    pub fn string_names(&self) -> Vec<&str> {
        self.string_steps.iter().map(|t| t.name()).collect()
    }

    pub fn token_names(&self) -> Vec<&str> {
        self.token_steps.iter().map(|t| t.name()).collect()
    }

    /// The full token-domain sequence including the implicit boundary
    /// steps, or an empty list when there are no token transforms.
    pub fn token_sequence(&self) -> Vec<&str> {
        if self.token_steps.is_empty() {
            return Vec::new();
        }
        let mut seq = Vec::with_capacity(self.token_steps.len() + 2);
        seq.push(TOKENIZE_STEP);
        seq.extend(self.token_names());
        seq.push(REJOIN_STEP);
        seq
    }

    /// `true` when the plan applies no transform at all
    pub fn is_empty(&self) -> bool {
        self.string_steps.is_empty() && self.token_steps.is_empty()
    }

    /// `true` when the plan needs the tokenize/rejoin boundary
    pub fn has_token_steps(&self) -> bool {
        !self.token_steps.is_empty()
    }

    /// `true` when a string transform was listed after a token transform,
    /// so partitioning changed the effective order.
    pub fn is_reordered(&self) -> bool {
        self.reordered
    }

    /// Total number of requested transforms
    pub fn len(&self) -> usize {
        self.string_steps.len() + self.token_steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static TransformRegistry {
        TransformRegistry::builtin()
    }

    #[test]
    fn test_unknown_names_all_reported() {
        let err = PipelinePlan::build(
            &["lowercase_typo", "another_typo", "to_lowercase"],
            registry(),
        )
        .unwrap_err();
        let expected: BTreeSet<String> = ["lowercase_typo", "another_typo"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(err.unknown_names(), Some(&expected));
    }

    #[test]
    fn test_private_and_entry_point_names_rejected() {
        let err = PipelinePlan::build(&[TOKENIZE_STEP, "run", "to_lowercase"], registry())
            .unwrap_err();
        let names = err.unknown_names().unwrap();
        assert!(names.contains(TOKENIZE_STEP));
        assert!(names.contains("run"));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_partition_preserves_order() {
        let plan = PipelinePlan::build(
            &[
                "to_lowercase",
                "remove_english_stop_words",
                "remove_url",
                "lemmatize_verb",
                "keep_only_alphabet",
                "lemmatize_noun",
            ],
            registry(),
        )
        .unwrap();

        assert_eq!(
            plan.string_names(),
            vec!["to_lowercase", "remove_url", "keep_only_alphabet"]
        );
        assert_eq!(
            plan.token_names(),
            vec!["remove_english_stop_words", "lemmatize_verb", "lemmatize_noun"]
        );
        assert_eq!(
            plan.token_sequence(),
            vec![
                TOKENIZE_STEP,
                "remove_english_stop_words",
                "lemmatize_verb",
                "lemmatize_noun",
                REJOIN_STEP
            ]
        );
        assert!(plan.is_reordered());
        assert_eq!(plan.len(), 6);
    }

    #[test]
    fn test_string_only_plan() {
        let plan = PipelinePlan::build(&["to_lowercase", "remove_url"], registry()).unwrap();
        assert!(plan.token_sequence().is_empty());
        assert!(!plan.has_token_steps());
        assert!(!plan.is_reordered());
    }

    #[test]
    fn test_token_transforms_last_is_not_reordered() {
        let plan = PipelinePlan::build(
            &["to_lowercase", "remove_english_stop_words", "lemmatize"],
            registry(),
        )
        .unwrap();
        assert!(!plan.is_reordered());
    }

    #[test]
    fn test_empty_names() {
        let names: [&str; 0] = [];
        let plan = PipelinePlan::build(&names, registry()).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
        assert!(plan.string_names().is_empty());
        assert!(plan.token_sequence().is_empty());
    }

    #[test]
    fn test_duplicates_kept() {
        let plan =
            PipelinePlan::build(&["lemmatize", "lemmatize", "to_lowercase"], registry()).unwrap();
        assert_eq!(plan.token_names(), vec!["lemmatize", "lemmatize"]);
        assert_eq!(plan.string_names(), vec!["to_lowercase"]);
    }

    #[test]
    fn test_custom_registry_domain_tag() {
        let mut registry = TransformRegistry::with_builtins();
        // Named like a string transform, tagged as a token transform.
        registry.register(Transform::tokens("drop_short", |tokens, _| {
            tokens.into_iter().filter(|t| t.len() > 2).collect()
        }));
        let plan = PipelinePlan::build(&["drop_short", "to_lowercase"], &registry).unwrap();
        assert_eq!(plan.token_names(), vec!["drop_short"]);
        assert_eq!(plan.string_names(), vec!["to_lowercase"]);
    }
}
