//! Metadata Export
//!
//! Serializes the current metadata mapping to a pretty-printed JSON
//! document and writes it as a downloadable artifact with a fixed name.
//! Export is a pure serialize-and-hand-off operation; only the surrounding
//! filesystem write can fail.

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::session::MetadataStore;

/// Fixed name of the exported artifact.
pub const EXPORT_FILE_NAME: &str = "proteomics_metadata.json";

/// MIME type of the exported artifact.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Renders a metadata mapping as the export document.
///
/// Pretty-printed JSON with 2-space indentation; keys are parameter ids,
/// values the entered strings. An untouched session renders as `{}`.
pub fn render_document(snapshot: &BTreeMap<String, String>) -> String {
    // BTreeMap serialization cannot fail
    serde_json::to_string_pretty(snapshot).unwrap_or_else(|_| "{}".to_string())
}

/// Writes the current session's export document into a directory.
///
/// The artifact is always named [`EXPORT_FILE_NAME`]; an existing file is
/// overwritten.
///
/// # Returns
///
/// The path of the written file.
pub fn write_export(store: &MetadataStore, dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let document = render_document(store.export_snapshot());
    let path = dir.join(EXPORT_FILE_NAME);

    fs::write(&path, &document).map_err(|e| {
        format!(
            "Failed to write export file '{}': {}",
            path.display(),
            e
        )
    })?;

    info!(
        "Exported {} metadata entries to {}",
        store.export_snapshot().len(),
        path.display()
    );

    Ok(path)
}
