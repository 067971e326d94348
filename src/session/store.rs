//! Metadata Store
//!
//! Holds the editing session state: the selected workflow, the
//! parameter-id → value mapping entered so far, and the ephemeral
//! highlighted-step marker used for step/parameter cross-referencing.
//!
//! Switching workflows always clears the mapping. Parameter sets differ
//! per workflow, and stale values from a previously selected workflow must
//! never leak into an export for a different one.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::catalog::{derive_parameters, derive_steps, Catalog, Parameter, WorkflowStep};

/// Editing session for one catalog.
///
/// Values are stored as plain strings keyed by parameter id. Untouched
/// parameters have no entry: defaults are advisory display text and are
/// never auto-populated into the mapping. Constraints are not validated
/// here either — option-set enforcement is an input-widget concern.
#[derive(Debug, Clone)]
pub struct MetadataStore {
    catalog: Catalog,
    selected_workflow: String,
    values: BTreeMap<String, String>,
    highlighted_step: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl MetadataStore {
    /// Creates a store over a catalog, selecting its first workflow.
    ///
    /// # Example
    ///
    /// ```
    /// use protometa::catalog::data::builtin_catalog;
    /// use protometa::session::MetadataStore;
    ///
    /// let store = MetadataStore::new(builtin_catalog());
    /// assert_eq!(store.selected_workflow(), "label_free");
    /// ```
    pub fn new(catalog: Catalog) -> Self {
        let selected_workflow = catalog
            .workflows
            .first()
            .map(|w| w.id.clone())
            .unwrap_or_default();

        Self {
            catalog,
            selected_workflow,
            values: BTreeMap::new(),
            highlighted_step: None,
            updated_at: None,
        }
    }

    /// Returns the catalog backing this session.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the id of the selected workflow.
    pub fn selected_workflow(&self) -> &str {
        &self.selected_workflow
    }

    /// Selects a workflow and clears the entire metadata mapping.
    ///
    /// Clearing is unconditional, even when re-selecting the current
    /// workflow; a selection always starts metadata fresh.
    pub fn select_workflow(&mut self, id: &str) -> Result<(), String> {
        if !self.catalog.has_workflow(id) {
            return Err(format!("Unknown workflow: '{}'", id));
        }

        info!("Selected workflow '{}', metadata cleared", id);
        self.selected_workflow = id.to_string();
        self.values.clear();
        self.highlighted_step = None;
        self.updated_at = None;
        Ok(())
    }

    /// Upserts one entry in the metadata mapping.
    ///
    /// The value is stored as given; advisory ranges and option sets are
    /// not checked here.
    pub fn set_value(&mut self, parameter_id: impl Into<String>, value: impl Into<String>) {
        let parameter_id = parameter_id.into();
        debug!("set {} in metadata mapping", parameter_id);
        self.values.insert(parameter_id, value.into());
        self.updated_at = Some(Utc::now());
    }

    /// Reads a value for display.
    ///
    /// Missing entries read as the empty string, never as the parameter's
    /// default.
    pub fn get_value(&self, parameter_id: &str) -> &str {
        self.values
            .get(parameter_id)
            .map(|v| v.as_str())
            .unwrap_or("")
    }

    /// Returns true if the user has entered a value for this parameter.
    pub fn is_touched(&self, parameter_id: &str) -> bool {
        self.values.contains_key(parameter_id)
    }

    /// Returns the number of entered values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values have been entered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the current metadata mapping for serialization.
    ///
    /// Contains only parameters the user actually touched under the
    /// currently selected workflow.
    pub fn export_snapshot(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Returns when the mapping was last edited, if at all.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Marks a step as highlighted, or clears the highlight with `None`.
    pub fn set_highlight(&mut self, step_id: Option<&str>) {
        self.highlighted_step = step_id.map(|s| s.to_string());
    }

    /// Returns the highlighted step id, if any.
    pub fn highlighted_step(&self) -> Option<&str> {
        self.highlighted_step.as_deref()
    }

    /// Derives the ordered step sequence for the selected workflow.
    pub fn steps(&self) -> Vec<WorkflowStep> {
        derive_steps(&self.catalog, &self.selected_workflow)
    }

    /// Derives the applicable parameter set for the selected workflow.
    pub fn parameters(&self) -> Vec<Parameter> {
        derive_parameters(&self.catalog, &self.selected_workflow)
    }

    /// Looks up a parameter of the selected workflow by id.
    pub fn parameter(&self, parameter_id: &str) -> Option<Parameter> {
        self.parameters().into_iter().find(|p| p.id == parameter_id)
    }

    /// Returns the parameters belonging to the highlighted step.
    ///
    /// Empty when nothing is highlighted. Ordering matches
    /// [`MetadataStore::parameters`].
    pub fn highlighted_parameters(&self) -> Vec<Parameter> {
        let Some(step_id) = &self.highlighted_step else {
            return Vec::new();
        };

        self.parameters()
            .into_iter()
            .filter(|p| &p.step == step_id)
            .collect()
    }
}
