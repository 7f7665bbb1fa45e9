//! Preprocessing specification types.
//!
//! A [`PreprocessSpec`] names the transforms to apply (explicitly or through
//! a [`Preset`]), runtime threading controls, and strictness settings. These
//! types are the input to the [`super::validation::ValidationEngine`] and to
//! [`Preprocessor::run_spec`](super::runner::Preprocessor::run_spec).
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "preset": "tweets",
//!   "transforms": ["to_lowercase", "remove_url", "lemmatize_noun"],
//!   "runtime": { "max_threads": 4 },
//!   "strict": false
//! }
//! ```
//!
//! `transforms`, when present, replaces the preset's list entirely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{PrepError, Result};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Top-level preprocessing specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Optional preset used when `transforms` is omitted.
    #[serde(default)]
    pub preset: Option<Preset>,

    /// Explicit ordered transform names.
    #[serde(default)]
    pub transforms: Option<Vec<String>>,

    /// Runtime threading controls.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl PreprocessSpec {
    /// A v1 spec with an explicit transform list
    pub fn with_transforms<I, S>(transforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            transforms: Some(transforms.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// A v1 spec using a preset
    pub fn with_preset(preset: Preset) -> Self {
        Self {
            preset: Some(preset),
            ..Self::default()
        }
    }

    /// Parse a spec from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the spec to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(PrepError::from)
    }

    /// The effective ordered transform list: explicit transforms, else the
    /// preset's list, else nothing.
    pub fn resolve_transforms(&self) -> Vec<String> {
        match (&self.transforms, self.preset) {
            (Some(list), _) => list.clone(),
            (None, Some(preset)) => preset.transforms().iter().map(|s| s.to_string()).collect(),
            (None, None) => Vec::new(),
        }
    }
}

impl Default for PreprocessSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            preset: None,
            transforms: None,
            runtime: RuntimeSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

// ─── Presets ────────────────────────────────────────────────────────────────

/// Named transform lists tuned for the corpora of the topic-modeling harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Short social-media posts: strip URLs, mentions and hashtags, keep
    /// letters only, drop stop words, lemmatize nouns.
    Tweets,
    /// Q&A forum posts: strip markup and escaped newlines, drop stop words,
    /// lemmatize verbs, nouns and adjectives.
    YahooAnswers,
}

impl Preset {
    pub fn transforms(&self) -> &'static [&'static str] {
        match self {
            Self::Tweets => &[
                "to_lowercase",
                "standardize_accented_chars",
                "remove_url",
                "expand_contractions",
                "remove_mentions",
                "remove_hashtags",
                "keep_only_alphabet",
                "remove_english_stop_words",
                "lemmatize_noun",
            ],
            Self::YahooAnswers => &[
                "remove_html_tags",
                "remove_url",
                "remove_new_lines",
                "to_lowercase",
                "remove_english_stop_words",
                "lemmatize_verb",
                "lemmatize_noun",
                "lemmatize_adjective",
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tweets => "tweets",
            Self::YahooAnswers => "yahoo_answers",
        }
    }
}

// ─── Runtime ────────────────────────────────────────────────────────────────

/// Runtime threading controls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum number of Rayon worker threads.
    /// `None` uses Rayon's default (all logical cores).
    #[serde(default)]
    pub max_threads: Option<usize>,

    /// Disable parallelism entirely (equivalent to `max_threads: 1`).
    /// When `true`, overrides `max_threads`.
    #[serde(default)]
    pub single_thread: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl RuntimeSpec {
    /// Resolve the effective thread count.
    ///
    /// - `single_thread == true` → `Some(1)`
    /// - `max_threads == Some(n)` → `Some(n)`
    /// - otherwise → `None` (use Rayon default)
    pub fn effective_threads(&self) -> Option<usize> {
        if self.single_thread {
            Some(1)
        } else {
            self.max_threads
        }
    }

    /// Build a scoped Rayon thread pool matching this config.
    ///
    /// Returns `Ok(None)` when no thread limit is set (use global pool).
    pub fn build_thread_pool(&self) -> Result<Option<rayon::ThreadPool>> {
        self.effective_threads()
            .map(|n| {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| {
                        PrepError::invalid_config(format!("failed to build Rayon thread pool: {e}"))
                    })
            })
            .transpose()
    }

    /// Execute `f` within a scoped Rayon thread pool matching this config.
    ///
    /// If no thread limit is set, `f` runs directly (using the global pool).
    /// Otherwise, a custom pool is created and `f` runs inside
    /// [`rayon::ThreadPool::install`], so any `par_iter()` within `f`
    /// uses the scoped pool.
    pub fn scoped<R: Send>(&self, f: impl FnOnce() -> R + Send) -> Result<R> {
        Ok(match self.build_thread_pool()? {
            Some(pool) => pool.install(f),
            None => f(),
        })
    }
}
