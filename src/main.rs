//! ProtoMeta CLI Entry Point
//!
//! Starts the interactive metadata editor.
//!
//! # Usage
//!
//! ```bash
//! # Edit with the built-in catalog
//! protometa
//!
//! # Use a lab-specific catalog
//! protometa lab_catalog.yaml
//!
//! # List workflows and exit
//! protometa --list-workflows
//!
//! # Preselect a workflow and export into a directory
//! protometa --workflow tmt --output /data/runs
//! ```

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};

use protometa::catalog::data::builtin_catalog;
use protometa::catalog::{load_catalog, validate_catalog};
use protometa::session::MetadataStore;
use protometa::ui::App;
use protometa::{APP_NAME, VERSION};

/// Command-line configuration parsed from arguments.
#[derive(Debug)]
struct Config {
    catalog_path: Option<String>,
    workflow: Option<String>,
    output_dir: PathBuf,
    list_workflows: bool,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            workflow: None,
            output_dir: PathBuf::from("."),
            list_workflows: false,
            verbose: false,
        }
    }
}

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints the application banner with version information.
fn print_banner() {
    println!();
    println!("{} v{}", APP_NAME, VERSION);
    println!("Proteomics Metadata Organizer");
    println!();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: protometa [OPTIONS] [CATALOG_FILE]");
    println!();
    println!("Arguments:");
    println!("  [CATALOG_FILE]      Optional catalog YAML file (default: built-in catalog)");
    println!();
    println!("Options:");
    println!("  --workflow ID       Preselect a workflow");
    println!("  --output DIR        Directory for the exported document (default: .)");
    println!("  --list-workflows    List available workflows and exit");
    println!("  --verbose           Enable debug logging");
    println!("  --help              Show this help message");
    println!("  --version           Show version information");
    println!();
    println!("Examples:");
    println!("  protometa");
    println!("  protometa lab_catalog.yaml --workflow tmt");
    println!("  protometa --output /data/runs");
}

/// Parses command-line arguments into a Config struct.
fn parse_arguments(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();
    let mut i = 1; // Skip program name

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", APP_NAME, VERSION);
                std::process::exit(0);
            }
            "--list-workflows" => {
                config.list_workflows = true;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--workflow" => {
                i += 1;
                if i >= args.len() {
                    return Err("--workflow requires a workflow id".to_string());
                }
                config.workflow = Some(args[i].clone());
            }
            "--output" => {
                i += 1;
                if i >= args.len() {
                    return Err("--output requires a directory argument".to_string());
                }
                config.output_dir = PathBuf::from(&args[i]);
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                if config.catalog_path.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                config.catalog_path = Some(arg.clone());
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Main application entry point.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let config = parse_arguments(&args).map_err(|e| {
        eprintln!("Error: {}", e);
        eprintln!();
        print_usage();
        e
    })?;

    // Setup logging
    setup_logging(config.verbose);

    // Load catalog
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Using catalog file: {}", path);
            load_catalog(path).map_err(|e| {
                error!("Failed to load catalog: {}", e);
                format!("Could not load catalog from '{}': {}", path, e)
            })?
        }
        None => {
            let catalog = builtin_catalog();
            validate_catalog(&catalog)?;
            catalog
        }
    };

    if config.list_workflows {
        for workflow in &catalog.workflows {
            println!("{:12} {}", workflow.id, workflow.name);
        }
        return Ok(());
    }

    if !config.output_dir.is_dir() {
        return Err(format!(
            "Output directory does not exist: {}",
            config.output_dir.display()
        )
        .into());
    }

    print_banner();

    // Create the session
    let mut store = MetadataStore::new(catalog);
    if let Some(workflow) = &config.workflow {
        store.select_workflow(workflow)?;
    }

    info!(
        "Session started: workflow '{}', {} parameters",
        store.selected_workflow(),
        store.parameters().len()
    );

    // Run the editor loop on stdin/stdout
    let mut app = App::new(store, config.output_dir);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    app.run(stdin.lock(), &mut stdout)?;

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
