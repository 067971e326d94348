//! Editing Session Module
//!
//! State for one metadata editing session: workflow selection, the
//! parameter value mapping, and the highlighted-step marker.

pub mod store;

pub use store::MetadataStore;
