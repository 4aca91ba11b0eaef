//! # Report Formatting
//!
//! Stateless rendering of reports for the console. Nothing here decides
//! whether a run passed; it only prints what the rule engine produced.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use wfcheck_rules::{AnyRuleSet, Report, Summary};

/// Output format for `check` and `rules`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

const RULE: &str = "==================================================";

/// Human-readable rendering of a validation run.
pub fn render_text(reports: &[Report], summary: &Summary) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "{}:", report.section());
        for verdict in report.verdicts() {
            if verdict.passed() {
                let _ = writeln!(out, "  OK:   {}", verdict.message());
            } else {
                let _ = writeln!(out, "  FAIL: [{}] {}", verdict.rule_id(), verdict.message());
            }
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Reports: {}/{} passed",
        summary.passed_count, summary.total_count
    );
    if summary.overall_passed {
        let _ = writeln!(out, "OK: all checks passed");
    } else {
        let _ = writeln!(out, "FAIL: some checks failed");
    }
    out
}

#[derive(Serialize)]
struct RunView<'a> {
    reports: &'a [Report],
    summary: &'a Summary,
}

/// JSON rendering of a validation run.
pub fn render_json(reports: &[Report], summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(&RunView { reports, summary })?)
}

#[derive(Serialize)]
struct RuleView<'a> {
    id: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct RuleSetView<'a> {
    name: &'a str,
    source: &'a str,
    rules: Vec<RuleView<'a>>,
}

fn rule_set_views(rule_sets: &[AnyRuleSet]) -> Vec<RuleSetView<'_>> {
    rule_sets
        .iter()
        .map(|set| RuleSetView {
            name: set.name(),
            source: set.source(),
            rules: set
                .rule_descriptions()
                .into_iter()
                .map(|(id, description)| RuleView { id, description })
                .collect(),
        })
        .collect()
}

/// Render the rule catalog.
pub fn render_rules(rule_sets: &[AnyRuleSet], format: OutputFormat) -> Result<String> {
    let views = rule_set_views(rule_sets);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&views)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for view in &views {
                let _ = writeln!(out, "{} ({})", view.name, view.source);
                for rule in &view.rules {
                    let _ = writeln!(out, "  {:<48} {}", rule.id, rule.description);
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}
