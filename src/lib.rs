//! ProtoMeta - Proteomics Metadata Organizer
//!
//! A form-driven metadata editor for proteomics laboratory workflows. The
//! user picks a quantification workflow (label-free, TMT, iTRAQ, or lab
//! extensions from a custom catalog), fills in the parameters applicable
//! to that workflow's protocol steps, and exports the entered values as a
//! JSON document.
//!
//! # Architecture
//!
//! The library is organized into four main modules:
//!
//! - [`catalog`]: Workflow/step/parameter tables and derivation logic
//! - [`session`]: The metadata store for one editing session
//! - [`export`]: JSON document rendering and file delivery
//! - [`ui`]: Terminal rendering and the interactive command loop
//!
//! # Example
//!
//! ```rust
//! use protometa::catalog::data::builtin_catalog;
//! use protometa::export::render_document;
//! use protometa::session::MetadataStore;
//!
//! fn main() -> Result<(), String> {
//!     let mut store = MetadataStore::new(builtin_catalog());
//!     store.select_workflow("tmt")?;
//!     store.set_value("tmt_plex", "TMT 6-plex");
//!
//!     let document = render_document(store.export_snapshot());
//!     assert!(document.contains("TMT 6-plex"));
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod export;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use catalog::{derive_parameters, derive_steps, Catalog, Parameter, WorkflowStep};
pub use export::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use session::MetadataStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "ProtoMeta";

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::data::builtin_catalog;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "ProtoMeta");
    }

    #[test]
    fn test_module_exports_store() {
        let store = MetadataStore::new(builtin_catalog());
        assert_eq!(store.selected_workflow(), "label_free");
    }

    #[test]
    fn test_module_exports_derivation() {
        let catalog = builtin_catalog();
        assert_eq!(derive_steps(&catalog, "tmt").len(), 7);
        assert_eq!(derive_parameters(&catalog, "tmt").len(), 10);
    }

    #[test]
    fn test_export_constants() {
        assert_eq!(EXPORT_FILE_NAME, "proteomics_metadata.json");
        assert_eq!(EXPORT_MIME_TYPE, "application/json");
    }
}
