//! Workflow Catalog Module
//!
//! Provides the static catalog of proteomics workflows, their protocol
//! steps, and editable parameters, plus the derivation logic that computes
//! the step sequence and parameter set for a selected workflow.
//!
//! # Structure
//!
//! - [`model`]: Core data structures (Catalog, WorkflowStep, Parameter)
//! - [`data`]: The built-in catalog
//! - [`derive`]: Pure derivation functions
//! - [`parser`]: YAML loading for replacement catalogs
//! - [`validator`]: Catalog consistency checking

pub mod data;
pub mod derive;
pub mod model;
pub mod parser;
pub mod validator;

pub use data::BUILTIN_CATALOG;
pub use derive::{derive_parameters, derive_steps, parameters_for_step};
pub use model::{Catalog, Constraint, DisplayHint, Parameter, WorkflowInfo, WorkflowStep};
pub use parser::load_catalog;
pub use validator::{validate_catalog, CatalogError};
