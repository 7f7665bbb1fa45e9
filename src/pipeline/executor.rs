//! Per-document execution of a [`PipelinePlan`].
//!
//! The executor is a pure function of `(document, plan, resources)`: a left
//! fold of the string steps, followed, when the plan has token steps, by
//! tokenize → token steps → rejoin. It holds no state and is safe to call
//! from any number of workers at once.

use crate::errors::{PrepError, Result};
use crate::nlp::NlpResources;
use crate::pipeline::plan::PipelinePlan;
use crate::transforms::{Transform, TransformFn};

/// Apply `plan` to one document.
///
/// `index` is the document's position in its batch and only appears in
/// error reports.
///
/// # Errors
///
/// [`PrepError::WorkerExecution`] when a transform fails.
pub fn execute(
    index: usize,
    document: &str,
    plan: &PipelinePlan<'_>,
    resources: &NlpResources,
) -> Result<String> {
    let mut text = document.to_string();
    for step in plan.string_steps() {
        text = apply_text(index, step, &text, resources)?;
    }

    if !plan.has_token_steps() {
        return Ok(text);
    }

    let mut tokens = resources.tokenizer.tokenize(&text);
    for step in plan.token_steps() {
        tokens = apply_tokens(index, step, tokens, resources)?;
    }
    Ok(resources.tokenizer.rejoin(&tokens))
}

fn apply_text(
    index: usize,
    step: &Transform,
    text: &str,
    resources: &NlpResources,
) -> Result<String> {
    match step.func() {
        TransformFn::Text(f) => {
            f(text, resources).map_err(|msg| PrepError::worker_execution(index, step.name(), msg))
        }
        TransformFn::Tokens(_) => Err(domain_mismatch(index, step)),
    }
}

fn apply_tokens(
    index: usize,
    step: &Transform,
    tokens: Vec<String>,
    resources: &NlpResources,
) -> Result<Vec<String>> {
    match step.func() {
        TransformFn::Tokens(f) => {
            f(tokens, resources).map_err(|msg| PrepError::worker_execution(index, step.name(), msg))
        }
        TransformFn::Text(_) => Err(domain_mismatch(index, step)),
    }
}

fn domain_mismatch(index: usize, step: &Transform) -> PrepError {
    PrepError::worker_execution(
        index,
        step.name(),
        format!("transform planned outside its {} domain", step.domain().as_str()),
    )
}
