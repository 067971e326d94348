//! Workflow Derivation
//!
//! Pure lookup functions that compute, for a selected workflow, the ordered
//! step sequence and the applicable parameter set. Both are recomputed from
//! the catalog on every workflow change; there is no cached or incremental
//! state, so re-deriving always yields the same sequences for the same id.

use super::model::{Catalog, Parameter, WorkflowStep};

/// Derives the ordered step sequence for a workflow.
///
/// The sequence is the fixed common-step pipeline followed by the
/// workflow's quantification steps, both in catalog order. Ids are
/// expected to come from [`Catalog::workflows`]; an id without a
/// quantification entry derives the common pipeline alone.
pub fn derive_steps(catalog: &Catalog, workflow_id: &str) -> Vec<WorkflowStep> {
    let mut steps = catalog.common_steps.clone();
    steps.extend_from_slice(catalog.extra_steps(workflow_id));
    steps
}

/// Derives the applicable parameter set for a workflow.
///
/// Common parameters first, then the workflow's own parameters (empty
/// sequence if the workflow defines none), each in catalog order.
pub fn derive_parameters(catalog: &Catalog, workflow_id: &str) -> Vec<Parameter> {
    let mut parameters = catalog.common_parameters.clone();
    parameters.extend_from_slice(catalog.extra_parameters(workflow_id));
    parameters
}

/// Returns the parameters of a workflow that belong to one step.
///
/// This backs the hover cross-reference: highlighting a step marks exactly
/// the parameters whose `step` field matches. Ordering follows
/// [`derive_parameters`].
pub fn parameters_for_step(catalog: &Catalog, workflow_id: &str, step_id: &str) -> Vec<Parameter> {
    derive_parameters(catalog, workflow_id)
        .into_iter()
        .filter(|p| p.step == step_id)
        .collect()
}
