//! Pipeline specification, planning, and execution.
//!
//! ## Submodules
//!
//! - [`plan`] — validate a transform-name list and partition it by domain
//! - [`executor`] — apply a plan to a single document
//! - [`runner`] — parallel batch dispatch over a Rayon pool
//! - [`spec`] — JSON-configurable specs, presets and runtime controls
//! - [`validation`] — rule-based spec validation

pub mod error_code;
pub mod errors;
pub mod executor;
pub mod plan;
pub mod runner;
pub mod spec;
pub mod validation;

pub use executor::execute;
pub use plan::{PipelinePlan, REJOIN_STEP, TOKENIZE_STEP};
pub use runner::{run, Preprocessor};
pub use spec::{Preset, PreprocessSpec, RuntimeSpec};
