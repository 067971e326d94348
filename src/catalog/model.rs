//! Catalog Data Model
//!
//! Core data structures describing proteomics workflows, their protocol
//! steps, and the editable parameters attached to each step.
//!
//! # Example YAML Format
//!
//! ```yaml
//! workflows:
//!   - id: tmt
//!     name: TMT Quantification
//!
//! common_steps:
//!   - id: sample_prep
//!     name: Sample Preparation
//!     hint: beaker
//!
//! quantification_steps:
//!   tmt:
//!     - id: tmt_labeling
//!       name: TMT Labeling
//!       hint: beaker
//!
//! common_parameters:
//!   - id: sample_amount
//!     name: Sample Amount
//!     description: The amount of protein used for analysis
//!     default: 50 μg
//!     range: 5-100 μg
//!     step: sample_prep
//!
//! workflow_parameters:
//!   tmt:
//!     - id: tmt_plex
//!       name: TMT Plex
//!       description: Number of TMT channels used
//!       default: TMT 11-plex
//!       options: [TMT 6-plex, TMT 10-plex, TMT 11-plex, TMT 16-plex]
//!       step: tmt_labeling
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named top-level experimental strategy (e.g. label-free, TMT, iTRAQ).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkflowInfo {
    /// Unique identifier used as the key for all per-workflow lookups
    pub id: String,

    /// Human-readable name shown in the workflow selector
    pub name: String,
}

impl WorkflowInfo {
    /// Creates a new workflow entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into().trim().to_string(),
            name: name.into().trim().to_string(),
        }
    }
}

/// Visual marker associated with a protocol step.
///
/// The terminal renderer maps each hint to a short glyph; the hint itself
/// carries no behavior.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisplayHint {
    Beaker,
    Arrow,
    Zap,
    Chart,
    Database,
    Search,
}

impl DisplayHint {
    /// Returns the glyph used when drawing the step diagram.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Beaker => "[B]",
            Self::Arrow => "[>]",
            Self::Zap => "[Z]",
            Self::Chart => "[C]",
            Self::Database => "[D]",
            Self::Search => "[S]",
        }
    }
}

/// One stage of the laboratory pipeline.
///
/// Steps are partitioned into common steps (shared by every workflow, fixed
/// order) and quantification steps (per-workflow, appended after the common
/// sequence).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStep {
    /// Unique identifier within any derived step sequence
    pub id: String,

    /// Human-readable step name
    pub name: String,

    /// Marker for the diagram renderer
    pub hint: DisplayHint,
}

impl WorkflowStep {
    /// Creates a new step.
    ///
    /// # Example
    ///
    /// ```
    /// use protometa::catalog::{DisplayHint, WorkflowStep};
    ///
    /// let step = WorkflowStep::new("lc", "LC", DisplayHint::Arrow);
    /// assert_eq!(step.id, "lc");
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, hint: DisplayHint) -> Self {
        Self {
            id: id.into().trim().to_string(),
            name: name.into().trim().to_string(),
            hint,
        }
    }
}

/// A user-editable setting attached to one protocol step.
///
/// The advisory default and range are never enforced; an option list, when
/// present, is enforced only by the input widget.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Unique identifier across the whole catalog (common and per-workflow
    /// sets combined) — the metadata mapping is keyed by this alone
    pub id: String,

    /// Human-readable label
    pub name: String,

    /// Tooltip description
    #[serde(default)]
    pub description: String,

    /// Advisory default, shown but never auto-populated into the mapping
    #[serde(rename = "default", default)]
    pub default_value: String,

    /// Advisory range (e.g. "5-100 μg"), free-text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// Enumerated option set; when non-empty the input widget restricts
    /// entry to exactly these values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Id of the step this parameter belongs to
    pub step: String,
}

/// Typed view of a parameter's constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint<'a> {
    /// Advisory numeric/textual range, not enforced anywhere
    Range(&'a str),
    /// Closed option set, enforced by the input widget only
    Options(&'a [String]),
    /// Free text
    FreeText,
}

impl Parameter {
    /// Creates a new free-text parameter attached to a step.
    pub fn new(id: impl Into<String>, name: impl Into<String>, step: impl Into<String>) -> Self {
        Self {
            id: id.into().trim().to_string(),
            name: name.into().trim().to_string(),
            description: String::new(),
            default_value: String::new(),
            range: None,
            options: Vec::new(),
            step: step.into().trim().to_string(),
        }
    }

    /// Sets the tooltip description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the advisory default value.
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    /// Sets the advisory range.
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Sets the enumerated option set.
    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    /// Returns the parameter's constraint.
    ///
    /// An option set takes precedence over a range if a catalog declares
    /// both (the built-in catalog never does).
    pub fn constraint(&self) -> Constraint<'_> {
        if !self.options.is_empty() {
            Constraint::Options(&self.options)
        } else if let Some(range) = &self.range {
            Constraint::Range(range)
        } else {
            Constraint::FreeText
        }
    }

    /// Returns true if the parameter is restricted to an option set.
    pub fn is_enumerated(&self) -> bool {
        !self.options.is_empty()
    }

    /// Returns true if `value` is admissible for this parameter's widget.
    ///
    /// Free-text and range parameters accept anything; enumerated
    /// parameters accept only their declared options.
    pub fn accepts(&self, value: &str) -> bool {
        if self.options.is_empty() {
            return true;
        }
        self.options.iter().any(|o| o == value)
    }
}

/// A complete workflow catalog: the closed set of workflows plus all step
/// and parameter tables.
///
/// The catalog is immutable once constructed; the built-in one lives behind
/// a `Lazy` static and user-supplied ones come from YAML files. Consistency
/// rules (unique ids, valid step references) are checked by
/// [`validate_catalog`](crate::catalog::validator::validate_catalog), not
/// defended against at lookup time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// The closed set of selectable workflows, in selector order
    pub workflows: Vec<WorkflowInfo>,

    /// Steps shared by every workflow, in pipeline order
    pub common_steps: Vec<WorkflowStep>,

    /// Per-workflow quantification steps, appended after the common steps
    #[serde(default)]
    pub quantification_steps: HashMap<String, Vec<WorkflowStep>>,

    /// Parameters that apply regardless of workflow, in form order
    pub common_parameters: Vec<Parameter>,

    /// Per-workflow parameters, appended after the common parameters
    #[serde(default)]
    pub workflow_parameters: HashMap<String, Vec<Parameter>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            workflows: Vec::new(),
            common_steps: Vec::new(),
            quantification_steps: HashMap::new(),
            common_parameters: Vec::new(),
            workflow_parameters: HashMap::new(),
        }
    }

    /// Looks up a workflow by id.
    pub fn workflow(&self, id: &str) -> Option<&WorkflowInfo> {
        self.workflows.iter().find(|w| w.id == id)
    }

    /// Returns true if `id` names a declared workflow.
    pub fn has_workflow(&self, id: &str) -> bool {
        self.workflow(id).is_some()
    }

    /// Returns the quantification steps for a workflow, in declared order.
    ///
    /// Returns an empty slice for ids without an entry; derivation stays
    /// total that way even though ids are expected to come from
    /// [`Catalog::workflows`].
    pub fn extra_steps(&self, workflow_id: &str) -> &[WorkflowStep] {
        self.quantification_steps
            .get(workflow_id)
            .map(|steps| steps.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the workflow-specific parameters, in declared order.
    ///
    /// Empty slice if the workflow defines none.
    pub fn extra_parameters(&self, workflow_id: &str) -> &[Parameter] {
        self.workflow_parameters
            .get(workflow_id)
            .map(|params| params.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the number of declared workflows.
    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    /// Returns true if the catalog declares no workflows.
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
