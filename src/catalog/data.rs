//! Built-in Workflow Catalog
//!
//! The standard catalog shipped with the application: three quantification
//! workflows (label-free, TMT, iTRAQ), the five-stage common pipeline, and
//! the parameter tables for each step.
//!
//! The catalog is process-wide immutable configuration. Consistency of the
//! tables (unique ids, valid step references) is asserted by the validator
//! tests, not at runtime.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::model::{Catalog, DisplayHint, Parameter, WorkflowInfo, WorkflowStep};

/// Lazily-initialized built-in catalog.
pub static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(builtin_catalog);

/// Builds the standard catalog.
///
/// Used directly by tests that need an owned copy; everything else should
/// go through [`BUILTIN_CATALOG`].
pub fn builtin_catalog() -> Catalog {
    let workflows = vec![
        WorkflowInfo::new("label_free", "Label-free Quantification"),
        WorkflowInfo::new("tmt", "TMT Quantification"),
        WorkflowInfo::new("itraq", "iTRAQ Quantification"),
    ];

    let common_steps = vec![
        WorkflowStep::new("sample_prep", "Sample Preparation", DisplayHint::Beaker),
        WorkflowStep::new("lc", "LC", DisplayHint::Arrow),
        WorkflowStep::new("ionization", "Ionization", DisplayHint::Zap),
        WorkflowStep::new("ms_analysis", "MS Analysis", DisplayHint::Chart),
        WorkflowStep::new("peptide_id", "Peptide ID", DisplayHint::Database),
    ];

    let mut quantification_steps = HashMap::new();
    quantification_steps.insert(
        "label_free".to_string(),
        vec![WorkflowStep::new(
            "label_free_quant",
            "Label-free Quant",
            DisplayHint::Search,
        )],
    );
    quantification_steps.insert(
        "tmt".to_string(),
        vec![
            WorkflowStep::new("tmt_labeling", "TMT Labeling", DisplayHint::Beaker),
            WorkflowStep::new("tmt_quant", "TMT Quant", DisplayHint::Search),
        ],
    );
    quantification_steps.insert(
        "itraq".to_string(),
        vec![
            WorkflowStep::new("itraq_labeling", "iTRAQ Labeling", DisplayHint::Beaker),
            WorkflowStep::new("itraq_quant", "iTRAQ Quant", DisplayHint::Search),
        ],
    );

    let common_parameters = vec![
        Parameter::new("sample_amount", "Sample Amount", "sample_prep")
            .with_description("The amount of protein used for analysis")
            .with_default("50 μg")
            .with_range("5-100 μg"),
        Parameter::new("digestion_enzyme", "Digestion Enzyme", "sample_prep")
            .with_description("Enzyme used to cleave proteins into peptides")
            .with_default("Trypsin")
            .with_options(&["Trypsin", "LysC", "Trypsin/LysC"]),
        Parameter::new("gradient_length", "LC Gradient Length", "lc")
            .with_description("Duration of the liquid chromatography gradient")
            .with_default("120 min")
            .with_range("30-180 min"),
        Parameter::new("ms1_resolution", "MS1 Resolution", "ms_analysis")
            .with_description("Resolution setting for MS1 scans")
            .with_default("60,000")
            .with_options(&["30,000", "60,000", "120,000"]),
        Parameter::new("ms2_resolution", "MS2 Resolution", "ms_analysis")
            .with_description("Resolution setting for MS2 scans")
            .with_default("30,000")
            .with_options(&["15,000", "30,000", "60,000"]),
        Parameter::new("precursor_tol", "Precursor Tolerance", "ms_analysis")
            .with_description("Mass tolerance for precursor ions")
            .with_default("10 ppm")
            .with_range("1-20 ppm"),
        Parameter::new("fragment_tol", "Fragment Tolerance", "ms_analysis")
            .with_description("Mass tolerance for fragment ions")
            .with_default("0.02 Da")
            .with_range("0.01-0.5 Da"),
        Parameter::new("database", "Protein Database", "peptide_id")
            .with_description("Reference proteome database for peptide/protein identification")
            .with_default("UniProt Human")
            .with_options(&["UniProt Human", "UniProt Mouse", "Custom"]),
    ];

    let mut workflow_parameters = HashMap::new();
    workflow_parameters.insert(
        "label_free".to_string(),
        vec![Parameter::new(
            "lfq_min_ratio_count",
            "LFQ Minimum Ratio Count",
            "label_free_quant",
        )
        .with_description("Minimum number of peptide ratios required for protein quantification")
        .with_default("2")
        .with_range("1-5")],
    );
    workflow_parameters.insert(
        "tmt".to_string(),
        vec![
            Parameter::new("tmt_plex", "TMT Plex", "tmt_labeling")
                .with_description("Number of TMT channels used")
                .with_default("TMT 11-plex")
                .with_options(&["TMT 6-plex", "TMT 10-plex", "TMT 11-plex", "TMT 16-plex"]),
            Parameter::new("tmt_ms3", "TMT MS3", "tmt_quant")
                .with_description("Use MS3 for TMT quantification")
                .with_default("Yes")
                .with_options(&["Yes", "No"]),
        ],
    );
    workflow_parameters.insert(
        "itraq".to_string(),
        vec![Parameter::new("itraq_plex", "iTRAQ Plex", "itraq_labeling")
            .with_description("Number of iTRAQ channels used")
            .with_default("iTRAQ 4-plex")
            .with_options(&["iTRAQ 4-plex", "iTRAQ 8-plex"])],
    );

    Catalog {
        workflows,
        common_steps,
        quantification_steps,
        common_parameters,
        workflow_parameters,
    }
}
