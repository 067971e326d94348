//! Parameter Form Rendering
//!
//! Lists the parameters of the selected workflow with their current
//! values, constraint hints, and tooltip text. Parameters on the
//! highlighted step are emphasized, mirroring the diagram highlight.

use colored::Colorize;

use crate::catalog::{Constraint, Parameter};
use crate::session::MetadataStore;

/// Renders the tooltip text for a parameter: description, advisory range
/// if declared, and the default value.
pub fn tooltip(param: &Parameter) -> String {
    let mut lines = Vec::new();

    if !param.description.is_empty() {
        lines.push(param.description.clone());
    }
    if let Some(range) = &param.range {
        lines.push(format!("Recommended range: {}", range));
    }
    if !param.default_value.is_empty() {
        lines.push(format!("Default: {}", param.default_value));
    }

    lines.join("\n")
}

/// Short constraint hint shown next to the input value.
fn constraint_hint(param: &Parameter) -> String {
    match param.constraint() {
        Constraint::Options(options) => format!("one of: {}", options.join(" | ")),
        Constraint::Range(range) => format!("range: {}", range),
        Constraint::FreeText => "free text".to_string(),
    }
}

/// Renders one form line for a parameter.
///
/// Untouched parameters show an empty value slot, never the default.
fn render_parameter_line(store: &MetadataStore, param: &Parameter, highlighted: bool) -> String {
    let value = store.get_value(&param.id);
    let value_cell = if value.is_empty() {
        "(unset)".dimmed().to_string()
    } else {
        value.to_string()
    };

    let name = if highlighted {
        param.name.white().on_blue().to_string()
    } else {
        param.name.bold().to_string()
    };

    let marker = if highlighted { "*" } else { " " };

    format!(
        "{} {:20} {:26} = {:14} [{}]",
        marker, param.id, name, value_cell, constraint_hint(param)
    )
}

/// Renders the full parameter form for the current session.
pub fn render_form(store: &MetadataStore) -> String {
    let highlighted_step = store.highlighted_step().map(|s| s.to_string());
    let mut output = String::new();

    for param in store.parameters() {
        let highlighted = highlighted_step.as_deref() == Some(param.step.as_str());
        output.push_str(&render_parameter_line(store, &param, highlighted));
        output.push('\n');
    }

    if let Some(updated) = store.updated_at() {
        output.push_str(&format!(
            "\nLast edited: {}\n",
            updated.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    output
}
