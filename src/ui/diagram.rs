//! Step Diagram Rendering
//!
//! Draws the derived step sequence as a single-line pipeline with the
//! highlighted step emphasized, mirroring the hover cross-reference in the
//! form view.

use colored::Colorize;

use crate::catalog::WorkflowStep;

/// Connector drawn between adjacent steps.
const CONNECTOR: &str = " -> ";

/// Renders the pipeline diagram for a derived step sequence.
///
/// Each step is shown as `glyph Name`; the highlighted step is drawn in
/// inverse blue and wrapped in brackets so the emphasis survives terminals
/// without color support.
pub fn render_pipeline(steps: &[WorkflowStep], highlighted: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(steps.len());

    for step in steps {
        let cell = format!("{} {}", step.hint.glyph(), step.name);

        if highlighted == Some(step.id.as_str()) {
            parts.push(format!("[{}]", cell.white().on_blue()));
        } else {
            parts.push(cell.dimmed().to_string());
        }
    }

    parts.join(CONNECTOR)
}

/// Renders the legend mapping step ids to names, one per line.
///
/// Used by the `steps` command so users can see which ids the `focus`
/// command accepts.
pub fn render_step_list(steps: &[WorkflowStep], highlighted: Option<&str>) -> String {
    let mut output = String::new();

    for step in steps {
        let marker = if highlighted == Some(step.id.as_str()) {
            "*"
        } else {
            " "
        };
        output.push_str(&format!(
            "{} {} {:18} {}\n",
            marker,
            step.hint.glyph(),
            step.id,
            step.name
        ));
    }

    output
}
