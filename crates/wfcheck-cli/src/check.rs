//! # Check Subcommand
//!
//! Loads the configured workflows and documentation, runs the
//! security-scanning catalog, prints the reports, and returns the exit code.
//!
//! A missing or malformed input is not an operational error: it shows up as
//! a failing verdict in the report for that input, and the run exits 1.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use wfcheck_rules::{
    catalog, load_document, load_text, run_validation, summarize, syntax_report,
    LoadedDocuments, Report,
};

use crate::config::WfcheckConfig;
use crate::output::{render_json, render_text, OutputFormat};
use crate::{resolve_path, EXIT_FAILED, EXIT_OK};

/// Section name of the report listing which workflows parsed.
pub const SYNTAX_SECTION: &str = "YAML Syntax";

/// Arguments for the `wfcheck check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every report passed, 1 otherwise.
pub fn run_check(args: &CheckArgs, repo_root: &Path, config: &WfcheckConfig) -> Result<u8> {
    let reports = validate_repository(repo_root, config)?;
    let summary = summarize(&reports);

    let rendered = match args.format {
        OutputFormat::Text => render_text(&reports, &summary),
        OutputFormat::Json => render_json(&reports, &summary)?,
    };
    println!("{rendered}");

    tracing::info!(
        passed = summary.passed_count,
        total = summary.total_count,
        overall_passed = summary.overall_passed,
        "validation finished"
    );

    Ok(if summary.overall_passed {
        EXIT_OK
    } else {
        EXIT_FAILED
    })
}

/// Load every input and run the catalog, syntax report first.
pub fn validate_repository(repo_root: &Path, config: &WfcheckConfig) -> Result<Vec<Report>> {
    let rule_sets = catalog::security_scanning(&config.sources())
        .context("failed to build the security-scanning catalog")?;
    let loaded = load_inputs(repo_root, config);

    let mut reports = vec![syntax_report(SYNTAX_SECTION, &loaded)];
    reports.extend(run_validation(&rule_sets, &loaded));
    Ok(reports)
}

/// Load the configured workflows and documentation relative to `repo_root`.
pub fn load_inputs(repo_root: &Path, config: &WfcheckConfig) -> LoadedDocuments {
    let sources = config.sources();
    let mut loaded = LoadedDocuments::new();

    for (path, source) in [
        (&config.primary_workflow, &sources.primary_workflow),
        (&config.secondary_workflow, &sources.secondary_workflow),
    ] {
        let resolved = resolve_path(path, repo_root);
        tracing::debug!(path = %resolved.display(), "loading workflow");
        loaded.insert_document(source.as_str(), load_document(&resolved, source));
    }

    let resolved = resolve_path(&config.documentation, repo_root);
    tracing::debug!(path = %resolved.display(), "loading documentation");
    loaded.insert_text(
        sources.documentation.as_str(),
        load_text(&resolved, &sources.documentation),
    );

    loaded
}
