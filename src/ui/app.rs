//! Interactive Editor Loop
//!
//! The terminal counterpart of the original form: a synchronous command
//! loop over the metadata store. Each input line is processed to
//! completion before the next is read, so there is exactly one writer and
//! no shared state.
//!
//! # Commands
//!
//! ```text
//! workflows            List available workflows
//! use <workflow>       Select a workflow (clears entered metadata)
//! steps                Show the step pipeline for the selection
//! show                 Show the parameter form
//! set <param> <value>  Enter a parameter value
//! info <param>         Show a parameter's tooltip
//! focus <step>         Highlight a step and its parameters
//! blur                 Clear the highlight
//! preview              Print the export document
//! export               Write proteomics_metadata.json
//! quit                 Exit
//! ```

use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use log::warn;

use crate::export::{write_export, EXPORT_FILE_NAME};
use crate::session::MetadataStore;
use crate::ui::diagram::{render_pipeline, render_step_list};
use crate::ui::form::{render_form, tooltip};

/// Whether the loop keeps reading after a command.
enum Flow {
    Continue,
    Quit,
}

/// Interactive metadata editor over one session.
pub struct App {
    store: MetadataStore,
    output_dir: PathBuf,
}

impl App {
    /// Creates an editor for a session, exporting into `output_dir`.
    pub fn new(store: MetadataStore, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            output_dir: output_dir.into(),
        }
    }

    /// Returns the underlying session state.
    pub fn store(&self) -> &MetadataStore {
        &self.store
    }

    /// Runs the command loop until `quit` or end of input.
    ///
    /// Reading from a generic `BufRead` keeps the loop testable with
    /// scripted input.
    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        self.print_selection(output)?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;

            match self.handle_command(line.trim(), output)? {
                Flow::Quit => break,
                Flow::Continue => {}
            }

            write!(output, "> ")?;
            output.flush()?;
        }

        Ok(())
    }

    /// Dispatches one command line.
    fn handle_command(&mut self, line: &str, output: &mut impl Write) -> Result<Flow, Box<dyn Error>> {
        let mut parts = line.splitn(3, char::is_whitespace);
        let command = parts.next().unwrap_or("");

        match command {
            "" => {}
            "help" => self.print_help(output)?,
            "workflows" => self.print_workflows(output)?,
            "use" => {
                let id = parts.next().unwrap_or("");
                self.select_workflow(id, output)?;
            }
            "steps" => self.print_steps(output)?,
            "show" => write!(output, "{}", render_form(&self.store))?,
            "set" => {
                let param_id = parts.next().unwrap_or("");
                let value = parts.next().unwrap_or("");
                self.set_value(param_id, value, output)?;
            }
            "info" => {
                let param_id = parts.next().unwrap_or("");
                self.print_tooltip(param_id, output)?;
            }
            "focus" => {
                let step_id = parts.next().unwrap_or("");
                self.focus_step(step_id, output)?;
            }
            "blur" => self.store.set_highlight(None),
            "preview" => {
                let document = crate::export::render_document(self.store.export_snapshot());
                writeln!(output, "{}", document)?;
            }
            "export" => self.export(output)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => {
                warn!("Unknown command: {}", other);
                writeln!(output, "Unknown command: '{}'. Type 'help' for commands.", other)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn print_selection(&self, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        let id = self.store.selected_workflow();
        let name = self
            .store
            .catalog()
            .workflow(id)
            .map(|w| w.name.as_str())
            .unwrap_or(id);

        writeln!(output, "Workflow: {} ({})", name.bold(), id)?;
        writeln!(
            output,
            "{}",
            render_pipeline(&self.store.steps(), self.store.highlighted_step())
        )?;
        Ok(())
    }

    fn print_help(&self, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        writeln!(output, "Commands:")?;
        writeln!(output, "  workflows            List available workflows")?;
        writeln!(output, "  use <workflow>       Select a workflow (clears entered metadata)")?;
        writeln!(output, "  steps                Show the step pipeline")?;
        writeln!(output, "  show                 Show the parameter form")?;
        writeln!(output, "  set <param> <value>  Enter a parameter value")?;
        writeln!(output, "  info <param>         Show a parameter's description and default")?;
        writeln!(output, "  focus <step>         Highlight a step and its parameters")?;
        writeln!(output, "  blur                 Clear the highlight")?;
        writeln!(output, "  preview              Print the export document")?;
        writeln!(output, "  export               Write {}", EXPORT_FILE_NAME)?;
        writeln!(output, "  quit                 Exit")?;
        Ok(())
    }

    fn print_workflows(&self, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        for workflow in &self.store.catalog().workflows {
            let marker = if workflow.id == self.store.selected_workflow() {
                "*"
            } else {
                " "
            };
            writeln!(output, "{} {:12} {}", marker, workflow.id, workflow.name)?;
        }
        Ok(())
    }

    fn select_workflow(&mut self, id: &str, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        if id.is_empty() {
            writeln!(output, "Usage: use <workflow>")?;
            return Ok(());
        }

        match self.store.select_workflow(id) {
            Ok(()) => self.print_selection(output)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
        Ok(())
    }

    fn print_steps(&self, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        let steps = self.store.steps();
        let highlighted = self.store.highlighted_step();

        writeln!(output, "{}", render_pipeline(&steps, highlighted))?;
        write!(output, "{}", render_step_list(&steps, highlighted))?;
        Ok(())
    }

    /// Applies a `set` command.
    ///
    /// Enumerated parameters are restricted to their option set here, at
    /// the widget level; the store itself never validates.
    fn set_value(&mut self, param_id: &str, value: &str, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        if param_id.is_empty() {
            writeln!(output, "Usage: set <param> <value>")?;
            return Ok(());
        }

        let Some(param) = self.store.parameter(param_id) else {
            writeln!(
                output,
                "Unknown parameter '{}' for workflow '{}'.",
                param_id,
                self.store.selected_workflow()
            )?;
            return Ok(());
        };

        if !param.accepts(value) {
            writeln!(
                output,
                "'{}' is not an option for {}. Choose one of: {}",
                value,
                param.name,
                param.options.join(" | ")
            )?;
            return Ok(());
        }

        self.store.set_value(param_id, value);
        writeln!(output, "{} = {}", param_id, value)?;
        Ok(())
    }

    fn print_tooltip(&self, param_id: &str, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        match self.store.parameter(param_id) {
            Some(param) => {
                writeln!(output, "{}", param.name.bold())?;
                writeln!(output, "{}", tooltip(&param))?;
            }
            None => writeln!(
                output,
                "Unknown parameter '{}' for workflow '{}'.",
                param_id,
                self.store.selected_workflow()
            )?,
        }
        Ok(())
    }

    fn focus_step(&mut self, step_id: &str, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        if step_id.is_empty() {
            writeln!(output, "Usage: focus <step>")?;
            return Ok(());
        }

        if !self.store.steps().iter().any(|s| s.id == step_id) {
            writeln!(
                output,
                "Unknown step '{}' for workflow '{}'.",
                step_id,
                self.store.selected_workflow()
            )?;
            return Ok(());
        }

        self.store.set_highlight(Some(step_id));

        for param in self.store.highlighted_parameters() {
            writeln!(output, "  {} ({})", param.id, param.name)?;
        }
        Ok(())
    }

    fn export(&self, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        match write_export(&self.store, &self.output_dir) {
            Ok(path) => writeln!(output, "Wrote {}", path.display())?,
            Err(e) => writeln!(output, "Export failed: {}", e)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::builtin_catalog;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(script: &str, output_dir: &std::path::Path) -> (App, String) {
        colored::control::set_override(false);

        let store = MetadataStore::new(builtin_catalog());
        let mut app = App::new(store, output_dir);
        let mut output = Vec::new();

        app.run(Cursor::new(script.to_string()), &mut output).unwrap();
        (app, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_set_and_show() {
        let dir = tempdir().unwrap();
        let (app, output) = run_script("set sample_amount 75 μg\nshow\nquit\n", dir.path());

        assert!(output.contains("sample_amount = 75 μg"));
        assert_eq!(app.store().get_value("sample_amount"), "75 μg");
    }

    #[test]
    fn test_use_switches_and_clears() {
        let dir = tempdir().unwrap();
        let (app, output) = run_script(
            "set sample_amount 75 μg\nuse tmt\nquit\n",
            dir.path(),
        );

        assert!(output.contains("TMT Quantification"));
        assert_eq!(app.store().selected_workflow(), "tmt");
        assert!(app.store().is_empty());
    }

    #[test]
    fn test_use_unknown_workflow() {
        let dir = tempdir().unwrap();
        let (app, output) = run_script("use silac\nquit\n", dir.path());

        assert!(output.contains("Unknown workflow"));
        assert_eq!(app.store().selected_workflow(), "label_free");
    }

    #[test]
    fn test_set_rejects_value_outside_options() {
        let dir = tempdir().unwrap();
        let (app, output) = run_script("set digestion_enzyme Pepsin\nquit\n", dir.path());

        assert!(output.contains("not an option"));
        assert!(output.contains("Trypsin"));
        assert!(!app.store().is_touched("digestion_enzyme"));
    }

    #[test]
    fn test_set_accepts_declared_option() {
        let dir = tempdir().unwrap();
        let (app, _) = run_script("set digestion_enzyme LysC\nquit\n", dir.path());

        assert_eq!(app.store().get_value("digestion_enzyme"), "LysC");
    }

    #[test]
    fn test_set_range_value_unchecked() {
        let dir = tempdir().unwrap();

        // Ranges are advisory; out-of-range values pass through
        let (app, _) = run_script("set gradient_length 500 min\nquit\n", dir.path());
        assert_eq!(app.store().get_value("gradient_length"), "500 min");
    }

    #[test]
    fn test_set_unknown_parameter() {
        let dir = tempdir().unwrap();
        let (_, output) = run_script("set tmt_plex TMT 6-plex\nquit\n", dir.path());

        // tmt_plex is not a label_free parameter
        assert!(output.contains("Unknown parameter 'tmt_plex'"));
    }

    #[test]
    fn test_focus_lists_step_parameters() {
        let dir = tempdir().unwrap();
        let (app, output) = run_script("focus ms_analysis\nquit\n", dir.path());

        assert_eq!(app.store().highlighted_step(), Some("ms_analysis"));
        assert!(output.contains("ms1_resolution"));
        assert!(output.contains("fragment_tol"));
    }

    #[test]
    fn test_focus_unknown_step() {
        let dir = tempdir().unwrap();
        let (app, output) = run_script("focus tmt_labeling\nquit\n", dir.path());

        // tmt_labeling is not in the label_free pipeline
        assert!(output.contains("Unknown step"));
        assert!(app.store().highlighted_step().is_none());
    }

    #[test]
    fn test_blur_clears_highlight() {
        let dir = tempdir().unwrap();
        let (app, _) = run_script("focus lc\nblur\nquit\n", dir.path());

        assert!(app.store().highlighted_step().is_none());
    }

    #[test]
    fn test_info_shows_tooltip() {
        let dir = tempdir().unwrap();
        let (_, output) = run_script("info precursor_tol\nquit\n", dir.path());

        assert!(output.contains("Mass tolerance for precursor ions"));
        assert!(output.contains("Default: 10 ppm"));
    }

    #[test]
    fn test_preview_prints_document() {
        let dir = tempdir().unwrap();
        let (_, output) = run_script(
            "set sample_amount 75 μg\npreview\nquit\n",
            dir.path(),
        );

        assert!(output.contains("\"sample_amount\": \"75 μg\""));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempdir().unwrap();
        let (_, output) = run_script(
            "use tmt\nset tmt_plex TMT 6-plex\nexport\nquit\n",
            dir.path(),
        );

        assert!(output.contains("Wrote"));
        let content = std::fs::read_to_string(dir.path().join(EXPORT_FILE_NAME)).unwrap();
        assert!(content.contains("TMT 6-plex"));
    }

    #[test]
    fn test_export_after_switch_is_empty_object() {
        let dir = tempdir().unwrap();
        run_script(
            "set lfq_min_ratio_count 3\nexport\nuse itraq\nexport\nquit\n",
            dir.path(),
        );

        let content = std::fs::read_to_string(dir.path().join(EXPORT_FILE_NAME)).unwrap();
        assert_eq!(content, "{}");
    }

    #[test]
    fn test_unknown_command() {
        let dir = tempdir().unwrap();
        let (_, output) = run_script("frobnicate\nquit\n", dir.path());

        assert!(output.contains("Unknown command"));
    }

    #[test]
    fn test_loop_ends_at_eof_without_quit() {
        let dir = tempdir().unwrap();
        let (app, _) = run_script("set sample_amount 75 μg\n", dir.path());

        assert_eq!(app.store().get_value("sample_amount"), "75 μg");
    }

    #[test]
    fn test_workflows_marks_selection() {
        let dir = tempdir().unwrap();
        let (_, output) = run_script("use itraq\nworkflows\nquit\n", dir.path());

        let marked: Vec<_> = output
            .lines()
            .filter(|l| l.starts_with("* "))
            .collect();
        assert!(marked.iter().any(|l| l.contains("itraq")));
    }
}
