//! Catalog Validation
//!
//! Consistency checks over a workflow catalog:
//! - Unique workflow, step, and parameter ids
//! - Step references from parameters resolve within the derived sequences
//! - Per-workflow tables keyed by declared workflows only
//! - Enumerated defaults drawn from their own option set
//!
//! A failing catalog is an authoring mistake, not a runtime condition, so
//! validation runs once when a catalog is loaded and collects every finding
//! instead of stopping at the first.

use std::collections::HashSet;

use log::{debug, info};
use thiserror::Error;

use super::derive::derive_steps;
use super::model::{Catalog, Parameter};

/// Validation error types for user-friendly error messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog declares no workflows")]
    EmptyCatalog,

    #[error("Duplicate workflow ID: '{0}'")]
    DuplicateWorkflowId(String),

    #[error("Workflow has empty or whitespace-only ID")]
    EmptyWorkflowId,

    #[error("Workflow '{0}' has no name")]
    EmptyWorkflowName(String),

    #[error("Workflow '{0}' has no quantification steps")]
    MissingQuantificationSteps(String),

    #[error("Duplicate step ID '{step}' in workflow '{workflow}'")]
    DuplicateStepId { workflow: String, step: String },

    #[error("Step '{0}' has empty ID or name")]
    InvalidStep(String),

    #[error("Duplicate parameter ID across catalog: '{0}'")]
    DuplicateParameterId(String),

    #[error("Parameter '{0}' has empty ID or name")]
    InvalidParameter(String),

    #[error("Parameter '{parameter}' references unknown step '{step}'")]
    UnknownStepReference { parameter: String, step: String },

    #[error("Parameter '{0}' declares an empty option set")]
    EmptyOptionSet(String),

    #[error("Parameter '{parameter}': default '{default}' is not a declared option")]
    DefaultOutsideOptions { parameter: String, default: String },

    #[error("Table '{table}' keyed by unknown workflow '{workflow}'")]
    UnknownWorkflowKey { table: String, workflow: String },
}

/// Validates parameter fields shared by the common and per-workflow sets.
fn validate_parameter(param: &Parameter) -> Vec<CatalogError> {
    let mut errors = Vec::new();

    if param.id.trim().is_empty() || param.name.trim().is_empty() {
        errors.push(CatalogError::InvalidParameter(param.id.clone()));
    }

    if param.is_enumerated() {
        if param.options.iter().all(|o| o.trim().is_empty()) {
            errors.push(CatalogError::EmptyOptionSet(param.id.clone()));
        } else if !param.default_value.is_empty() && !param.accepts(&param.default_value) {
            errors.push(CatalogError::DefaultOutsideOptions {
                parameter: param.id.clone(),
                default: param.default_value.clone(),
            });
        }
    }

    errors
}

/// Validates the entire catalog.
///
/// Performs the following checks:
/// 1. At least one workflow, all with non-empty ids and names
/// 2. No duplicate workflow ids
/// 3. Per-workflow step/parameter tables reference declared workflows
/// 4. Every workflow has quantification steps
/// 5. Derived step sequences contain no duplicate step ids
/// 6. Parameter ids unique across common and all per-workflow sets
/// 7. Every parameter's step exists in each derived sequence it applies to
/// 8. Enumerated parameters have usable options and an admissible default
///
/// All findings are collected and joined into one message.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), String> {
    info!(
        "Validating catalog: {} workflows, {} common steps, {} common parameters",
        catalog.workflows.len(),
        catalog.common_steps.len(),
        catalog.common_parameters.len()
    );

    let mut errors = Vec::new();

    if catalog.workflows.is_empty() {
        return Err(CatalogError::EmptyCatalog.to_string());
    }

    // Workflow identity checks
    let mut workflow_ids: HashSet<&str> = HashSet::new();
    for workflow in &catalog.workflows {
        if workflow.id.trim().is_empty() {
            errors.push(CatalogError::EmptyWorkflowId);
            continue;
        }
        if workflow.name.trim().is_empty() {
            errors.push(CatalogError::EmptyWorkflowName(workflow.id.clone()));
        }
        if !workflow_ids.insert(&workflow.id) {
            errors.push(CatalogError::DuplicateWorkflowId(workflow.id.clone()));
        }
    }

    // Table keys must name declared workflows
    for key in catalog.quantification_steps.keys() {
        if !workflow_ids.contains(key.as_str()) {
            errors.push(CatalogError::UnknownWorkflowKey {
                table: "quantification_steps".to_string(),
                workflow: key.clone(),
            });
        }
    }
    for key in catalog.workflow_parameters.keys() {
        if !workflow_ids.contains(key.as_str()) {
            errors.push(CatalogError::UnknownWorkflowKey {
                table: "workflow_parameters".to_string(),
                workflow: key.clone(),
            });
        }
    }

    // Step checks per derived sequence
    for workflow in &catalog.workflows {
        if catalog.extra_steps(&workflow.id).is_empty() {
            errors.push(CatalogError::MissingQuantificationSteps(workflow.id.clone()));
        }

        let mut seen_steps: HashSet<String> = HashSet::new();
        for step in derive_steps(catalog, &workflow.id) {
            if step.id.trim().is_empty() || step.name.trim().is_empty() {
                errors.push(CatalogError::InvalidStep(step.id.clone()));
            }
            if !seen_steps.insert(step.id.clone()) {
                errors.push(CatalogError::DuplicateStepId {
                    workflow: workflow.id.clone(),
                    step: step.id,
                });
            }
        }
        debug!(
            "Workflow '{}': {} steps in derived sequence",
            workflow.id,
            seen_steps.len()
        );
    }

    // Parameter ids are unique across the whole catalog; the metadata
    // mapping is keyed by id alone
    let mut seen_params: HashSet<&str> = HashSet::new();
    let all_parameters = catalog
        .common_parameters
        .iter()
        .chain(catalog.workflow_parameters.values().flatten());

    for param in all_parameters {
        errors.extend(validate_parameter(param));
        if !seen_params.insert(&param.id) {
            errors.push(CatalogError::DuplicateParameterId(param.id.clone()));
        }
    }

    // Common parameters must point at common steps
    let common_step_ids: HashSet<&str> =
        catalog.common_steps.iter().map(|s| s.id.as_str()).collect();
    for param in &catalog.common_parameters {
        if !common_step_ids.contains(param.step.as_str()) {
            errors.push(CatalogError::UnknownStepReference {
                parameter: param.id.clone(),
                step: param.step.clone(),
            });
        }
    }

    // Workflow parameters must point into their workflow's derived sequence
    for (workflow_id, params) in &catalog.workflow_parameters {
        let step_ids: HashSet<String> = derive_steps(catalog, workflow_id)
            .into_iter()
            .map(|s| s.id)
            .collect();

        for param in params {
            if !step_ids.contains(&param.step) {
                errors.push(CatalogError::UnknownStepReference {
                    parameter: param.id.clone(),
                    step: param.step.clone(),
                });
            }
        }
    }

    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(messages.join("\n"));
    }

    info!("Catalog validated: {} workflows", catalog.workflows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::builtin_catalog;
    use crate::catalog::model::{DisplayHint, WorkflowInfo, WorkflowStep};

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(validate_catalog(&builtin_catalog()).is_ok());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let catalog = Catalog::new();
        let result = validate_catalog(&catalog);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("no workflows"));
    }

    #[test]
    fn test_duplicate_workflow_id() {
        let mut catalog = builtin_catalog();
        catalog
            .workflows
            .push(WorkflowInfo::new("tmt", "TMT Again"));

        let result = validate_catalog(&catalog);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Duplicate workflow ID"));
    }

    #[test]
    fn test_duplicate_parameter_id_across_sets() {
        let mut catalog = builtin_catalog();

        // Reuse a common parameter id inside a workflow-specific set
        catalog
            .workflow_parameters
            .get_mut("tmt")
            .unwrap()
            .push(Parameter::new("sample_amount", "Shadowed", "tmt_quant"));

        let result = validate_catalog(&catalog);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Duplicate parameter ID"));
    }

    #[test]
    fn test_parameter_unknown_step() {
        let mut catalog = builtin_catalog();
        catalog
            .common_parameters
            .push(Parameter::new("orphan", "Orphan", "no_such_step"));

        let result = validate_catalog(&catalog);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("unknown step"));
    }

    #[test]
    fn test_workflow_parameter_step_in_other_workflow() {
        let mut catalog = builtin_catalog();

        // A TMT parameter pointing at an iTRAQ-only step is a reference error
        catalog
            .workflow_parameters
            .get_mut("tmt")
            .unwrap()
            .push(Parameter::new("misplaced", "Misplaced", "itraq_labeling"));

        let result = validate_catalog(&catalog);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("unknown step 'itraq_labeling'"));
    }

    #[test]
    fn test_missing_quantification_steps() {
        let mut catalog = builtin_catalog();
        catalog.quantification_steps.remove("itraq");

        let result = validate_catalog(&catalog);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("no quantification steps"));
    }

    #[test]
    fn test_duplicate_step_in_derived_sequence() {
        let mut catalog = builtin_catalog();
        catalog
            .quantification_steps
            .get_mut("tmt")
            .unwrap()
            .push(WorkflowStep::new("lc", "LC Again", DisplayHint::Arrow));

        let result = validate_catalog(&catalog);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Duplicate step ID"));
    }

    #[test]
    fn test_unknown_table_key() {
        let mut catalog = builtin_catalog();
        catalog.quantification_steps.insert(
            "silac".to_string(),
            vec![WorkflowStep::new("silac_quant", "SILAC Quant", DisplayHint::Search)],
        );

        let result = validate_catalog(&catalog);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("unknown workflow 'silac'"));
    }

    #[test]
    fn test_default_outside_options() {
        let mut catalog = builtin_catalog();
        catalog.common_parameters.push(
            Parameter::new("polarity", "Polarity", "ionization")
                .with_default("Sideways")
                .with_options(&["Positive", "Negative"]),
        );

        let result = validate_catalog(&catalog);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not a declared option"));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut catalog = builtin_catalog();
        catalog
            .workflows
            .push(WorkflowInfo::new("tmt", "TMT Again"));
        catalog
            .common_parameters
            .push(Parameter::new("orphan", "Orphan", "no_such_step"));

        let message = validate_catalog(&catalog).unwrap_err();
        assert!(message.contains("Duplicate workflow ID"));
        assert!(message.contains("unknown step"));
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::DuplicateParameterId("tmt_plex".to_string());
        assert!(err.to_string().contains("tmt_plex"));

        let err = CatalogError::UnknownStepReference {
            parameter: "p".to_string(),
            step: "s".to_string(),
        };
        assert!(err.to_string().contains("unknown step 's'"));
    }
}
