//! Terminal Presentation Module
//!
//! Rendering and interaction for the metadata editor:
//!
//! - [`diagram`]: ASCII pipeline diagram of the derived steps
//! - [`form`]: Parameter form listing and tooltip text
//! - [`app`]: The synchronous command loop

pub mod app;
pub mod diagram;
pub mod form;

pub use app::App;
