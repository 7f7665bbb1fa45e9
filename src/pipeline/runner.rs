//! Pipeline runner: validates, plans, and dispatches a batch.
//!
//! [`Preprocessor::run`] is the batch entry point. It validates the
//! requested transform names before any work is scheduled, builds a
//! [`PipelinePlan`], then maps [`execute`] over the documents on a Rayon
//! pool. Results are collected positionally, so the output order always
//! matches the input order regardless of which worker finishes first.
//!
//! An empty transform list is the "skip preprocessing" fast path: documents
//! come back unchanged and a warning is logged.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::errors::{PrepError, Result};
use crate::nlp::NlpResources;
use crate::pipeline::executor::execute;
use crate::pipeline::plan::PipelinePlan;
use crate::pipeline::spec::{PreprocessSpec, RuntimeSpec};
use crate::pipeline::validation::ValidationEngine;
use crate::registry::TransformRegistry;

/// Batch preprocessor bound to a registry, language resources and runtime
/// threading controls.
#[derive(Debug, Clone)]
pub struct Preprocessor<'r> {
    registry: &'r TransformRegistry,
    resources: NlpResources,
    runtime: RuntimeSpec,
}

impl Preprocessor<'static> {
    /// Preprocessor over the built-in registry with English resources and
    /// one worker per logical core.
    pub fn new() -> Self {
        Self::with_registry(TransformRegistry::builtin())
    }
}

impl Default for Preprocessor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Preprocessor<'r> {
    /// Preprocessor over a custom registry
    pub fn with_registry(registry: &'r TransformRegistry) -> Self {
        Self {
            registry,
            resources: NlpResources::english(),
            runtime: RuntimeSpec::default(),
        }
    }

    /// Replace the language resources handed to every transform
    pub fn with_resources(mut self, resources: NlpResources) -> Self {
        self.resources = resources;
        self
    }

    /// Replace the runtime threading controls
    pub fn with_runtime(mut self, runtime: RuntimeSpec) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn registry(&self) -> &'r TransformRegistry {
        self.registry
    }

    pub fn resources(&self) -> &NlpResources {
        &self.resources
    }

    /// Validate `names` and build the plan without processing anything.
    pub fn plan<S: AsRef<str>>(&self, names: &[S]) -> Result<PipelinePlan<'r>> {
        PipelinePlan::build(names, self.registry)
    }

    /// Apply the named transforms, in order, to every document.
    ///
    /// # Errors
    ///
    /// - [`PrepError::UnknownTransform`] before any document is processed
    /// - [`PrepError::WorkerExecution`] for the first failing document
    /// - [`PrepError::InvalidConfig`] when the thread pool cannot be built
    pub fn run<D, S>(&self, documents: &[D], names: &[S]) -> Result<Vec<String>>
    where
        D: AsRef<str> + Sync,
        S: AsRef<str>,
    {
        if names.is_empty() {
            warn!(
                documents = documents.len(),
                "no preprocessing transforms given, preprocessing is skipped"
            );
            return Ok(documents.iter().map(|d| d.as_ref().to_string()).collect());
        }

        let plan = self.plan(names)?;
        self.run_plan(documents, &plan)
    }

    /// Apply an already-built plan to every document.
    pub fn run_plan<D>(&self, documents: &[D], plan: &PipelinePlan<'_>) -> Result<Vec<String>>
    where
        D: AsRef<str> + Sync,
    {
        if plan.is_empty() {
            warn!(
                documents = documents.len(),
                "pipeline plan is empty, preprocessing is skipped"
            );
            return Ok(documents.iter().map(|d| d.as_ref().to_string()).collect());
        }

        let span = tracing::info_span!("preprocess", documents = documents.len());
        let _guard = span.enter();

        debug!(available = ?self.registry.available(), "available preprocessing transforms");
        info!(transforms = ?plan.string_names(), "string transforms will be applied in order");
        if plan.has_token_steps() {
            info!(
                transforms = ?plan.token_sequence(),
                "then token transforms will be applied in order"
            );
        }
        if plan.is_reordered() {
            warn!("token transforms listed before string transforms will run after all of them");
        }

        let started = Instant::now();
        let resources = &self.resources;
        let output = self.runtime.scoped(|| {
            documents
                .par_iter()
                .enumerate()
                .map(|(idx, doc)| execute(idx, doc.as_ref(), plan, resources))
                .collect::<Result<Vec<String>>>()
        })??;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            threads = self.runtime.effective_threads().unwrap_or_else(rayon::current_num_threads),
            "preprocessing completed"
        );
        Ok(output)
    }

    /// Validate a spec, then run the transforms it resolves to.
    ///
    /// The spec's runtime section overrides this preprocessor's own.
    /// Validation warnings are logged; validation errors abort with
    /// [`PrepError::InvalidSpec`] before any document is processed.
    pub fn run_spec<D>(&self, documents: &[D], spec: &PreprocessSpec) -> Result<Vec<String>>
    where
        D: AsRef<str> + Sync,
    {
        let report = ValidationEngine::with_defaults().validate(spec);
        for warning in report.warnings() {
            warn!(%warning, "preprocessing spec warning");
        }
        if report.has_errors() {
            return Err(PrepError::InvalidSpec {
                errors: report.errors().cloned().collect(),
            });
        }

        let runner = Self {
            registry: self.registry,
            resources: self.resources.clone(),
            runtime: spec.runtime.clone(),
        };
        runner.run(documents, &spec.resolve_transforms())
    }
}

/// Apply the named built-in transforms to every document using all cores.
///
/// Shorthand for [`Preprocessor::new`] followed by [`Preprocessor::run`].
pub fn run<D, S>(documents: &[D], names: &[S]) -> Result<Vec<String>>
where
    D: AsRef<str> + Sync,
    S: AsRef<str>,
{
    Preprocessor::new().run(documents, names)
}
