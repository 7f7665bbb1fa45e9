//! # rapid_textprep
//!
//! Configurable, parallel text preprocessing for topic-modeling corpora.
//!
//! A pipeline is an ordered list of named transforms. String-domain
//! transforms rewrite whole documents; token-domain transforms (stop-word
//! removal, lemmatization) run between an implicit tokenize and rejoin step.
//! Batches are processed on a Rayon pool and returned in input order.
//!
//! ```rust,ignore
//! let docs = ["Don't is great! https://x.com"];
//! let out = rapid_textprep::run(&docs, &["to_lowercase", "remove_url", "expand_contractions"])?;
//! assert_eq!(out, vec!["do not is great!"]);
//! ```

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod registry;
pub mod transforms;

// Re-export commonly used types
pub use errors::{PrepError, Result};
pub use nlp::{
    ContractionExpander, Lemmatizer, NlpResources, PartOfSpeech, StopwordFilter, Tokenizer,
};
pub use pipeline::error_code::ErrorCode;
pub use pipeline::errors::PipelineSpecError;
pub use pipeline::validation::{ValidationEngine, ValidationReport};
pub use pipeline::{
    execute, run, PipelinePlan, Preprocessor, Preset, PreprocessSpec, RuntimeSpec,
};
pub use registry::TransformRegistry;
pub use transforms::{Transform, TransformDomain};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
