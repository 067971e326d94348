//! Catalog Parser
//!
//! Handles loading replacement catalogs from YAML files. Laboratories with
//! additional workflows or instrument-specific parameter tables can supply
//! their own catalog instead of the built-in one; the file goes through the
//! full consistency check before it is handed out.

use std::error::Error;
use std::fs;

use log::{debug, info};

use super::model::Catalog;
use super::validator::validate_catalog;

/// Loads a catalog from a YAML file.
///
/// This function:
/// 1. Reads and parses the YAML file
/// 2. Validates catalog consistency (unique ids, step references)
///
/// # Arguments
///
/// * `path` - Path to the catalog YAML file
///
/// # Returns
///
/// * `Ok(Catalog)` - Successfully loaded and validated catalog
/// * `Err` - Read, parse, or validation error
///
/// # Example
///
/// ```rust,no_run
/// use protometa::catalog::load_catalog;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let catalog = load_catalog("lab_catalog.yaml")?;
///     println!("Loaded {} workflows", catalog.workflows.len());
///     Ok(())
/// }
/// ```
pub fn load_catalog(path: &str) -> Result<Catalog, Box<dyn Error>> {
    info!("Loading catalog from: {}", path);

    let yaml_content = fs::read_to_string(path).map_err(|e| {
        format!(
            "Failed to read catalog file '{}': {}. Check that the file exists and is readable.",
            path, e
        )
    })?;

    debug!("YAML content loaded ({} bytes)", yaml_content.len());

    let catalog: Catalog = serde_yaml::from_str(&yaml_content)
        .map_err(|e| format!("Failed to parse catalog YAML: {}. Check the file format.", e))?;

    info!(
        "Parsed {} workflows, {} common steps, {} common parameters",
        catalog.workflows.len(),
        catalog.common_steps.len(),
        catalog.common_parameters.len()
    );

    validate_catalog(&catalog)?;

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_CATALOG: &str = r#"
workflows:
  - id: label_free
    name: Label-free Quantification

common_steps:
  - id: sample_prep
    name: Sample Preparation
    hint: beaker
  - id: ms_analysis
    name: MS Analysis
    hint: chart

quantification_steps:
  label_free:
    - id: label_free_quant
      name: Label-free Quant
      hint: search

common_parameters:
  - id: sample_amount
    name: Sample Amount
    description: The amount of protein used for analysis
    default: 50 μg
    range: 5-100 μg
    step: sample_prep

workflow_parameters:
  label_free:
    - id: lfq_min_ratio_count
      name: LFQ Minimum Ratio Count
      default: "2"
      range: 1-5
      step: label_free_quant
"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_minimal_catalog() {
        let file = write_temp(MINIMAL_CATALOG);
        let catalog = load_catalog(file.path().to_str().unwrap()).unwrap();

        assert_eq!(catalog.workflows.len(), 1);
        assert_eq!(catalog.common_steps.len(), 2);
        assert_eq!(catalog.extra_parameters("label_free").len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_catalog("/nonexistent/catalog.yaml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let file = write_temp("workflows: [not: {valid");
        let result = load_catalog(file.path().to_str().unwrap());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn test_load_inconsistent_catalog_rejected() {
        // Parameter points at a step that is not in the pipeline
        let broken = MINIMAL_CATALOG.replace("step: sample_prep", "step: missing_step");
        let file = write_temp(&broken);

        let result = load_catalog(file.path().to_str().unwrap());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown step"));
    }

    #[test]
    fn test_load_catalog_without_optional_tables() {
        let yaml = r#"
workflows:
  - id: lf
    name: Label-free

common_steps:
  - id: prep
    name: Prep
    hint: beaker

quantification_steps:
  lf:
    - id: lf_quant
      name: LF Quant
      hint: search

common_parameters: []
"#;
        let file = write_temp(yaml);
        let catalog = load_catalog(file.path().to_str().unwrap()).unwrap();

        assert!(catalog.common_parameters.is_empty());
        assert!(catalog.extra_parameters("lf").is_empty());
    }
}
