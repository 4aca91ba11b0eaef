//! # Security-Scanning Rule Catalog
//!
//! The rule sets that verify a repository's CI security scanning is wired
//! up: the primary workflow's `security-scan` job, the secondary workflow's
//! `security-scan-artifacts` job, the `docker` job's dependency on it, and
//! the companion documentation.
//!
//! Rule ids are stable and prefixed by the job or document they inspect.

use wfcheck_core::job::job_path;

use crate::checks::{StructuralCheck, TextCheck};
use crate::rule::{Rule, RuleSet, RuleSetError};
use crate::runner::AnyRuleSet;

pub const PRIMARY_WORKFLOW: &str = ".github/workflows/ci.yml";
pub const SECONDARY_WORKFLOW: &str = ".github/workflows/ci-cd.yml";
pub const DOCUMENTATION: &str = ".github/CI_SECURITY_SCANNING.md";

pub const SECURITY_SCAN_JOB: &str = "security-scan";
pub const ARTIFACT_SCAN_JOB: &str = "security-scan-artifacts";
pub const DOCKER_JOB: &str = "docker";
pub const BUILD_JOB: &str = "build";

pub const SECURITY_EVENTS_PERMISSION: &str = "security-events";

/// Steps the primary scan job must have, matched by substring.
pub const REQUIRED_STEPS: [&str; 5] = [
    "Download build artifacts",
    "Run Trivy vulnerability scanner on build artifacts",
    "Upload Trivy results to GitHub Security tab",
    "Run npm audit on production dependencies",
    "Check for critical vulnerabilities",
];

/// Headings the documentation must contain.
pub const REQUIRED_SECTIONS: [&str; 5] = [
    "# CI Security Scanning",
    "## Security Scanning Jobs",
    "## Viewing Results",
    "## Configuration",
    "## Troubleshooting",
];

/// Source names the catalog's rule sets read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSources {
    pub primary_workflow: String,
    pub secondary_workflow: String,
    pub documentation: String,
}

impl Default for CatalogSources {
    fn default() -> Self {
        Self {
            primary_workflow: PRIMARY_WORKFLOW.to_string(),
            secondary_workflow: SECONDARY_WORKFLOW.to_string(),
            documentation: DOCUMENTATION.to_string(),
        }
    }
}

/// The full security-scanning catalog, in reporting order.
pub fn security_scanning(sources: &CatalogSources) -> Result<Vec<AnyRuleSet>, RuleSetError> {
    Ok(vec![
        primary_scan_job(&sources.primary_workflow)?.into(),
        artifact_scan_job(&sources.secondary_workflow)?.into(),
        cross_job_dependencies(&sources.secondary_workflow)?.into(),
        documentation(&sources.documentation)?.into(),
    ])
}

/// `security-scan` in the primary workflow.
pub fn primary_scan_job(source: &str) -> Result<RuleSet<StructuralCheck>, RuleSetError> {
    let mut rules = scan_job_rules(SECURITY_SCAN_JOB);
    rules.extend(REQUIRED_STEPS.iter().map(|step| {
        Rule::new(
            format!("{SECURITY_SCAN_JOB}.step.{}", slug(step)),
            format!("job '{SECURITY_SCAN_JOB}' has a step named like '{step}'"),
            StructuralCheck::StepNamed {
                job: SECURITY_SCAN_JOB.to_string(),
                substring: (*step).to_string(),
            },
        )
    }));
    RuleSet::new("CI Security Scan Job", source, rules)
}

/// `security-scan-artifacts` in the secondary workflow.
pub fn artifact_scan_job(source: &str) -> Result<RuleSet<StructuralCheck>, RuleSetError> {
    RuleSet::new(
        "CI/CD Security Scan Artifacts Job",
        source,
        scan_job_rules(ARTIFACT_SCAN_JOB),
    )
}

/// The `docker` job must wait for the artifact scan.
pub fn cross_job_dependencies(source: &str) -> Result<RuleSet<StructuralCheck>, RuleSetError> {
    RuleSet::new(
        "CI/CD Job Dependencies",
        source,
        vec![
            Rule::new(
                format!("{DOCKER_JOB}.exists"),
                format!("job '{DOCKER_JOB}' is defined"),
                StructuralCheck::KeyExists {
                    path: job_path(DOCKER_JOB),
                },
            ),
            Rule::new(
                format!("{DOCKER_JOB}.needs.{ARTIFACT_SCAN_JOB}"),
                format!("job '{DOCKER_JOB}' depends on '{ARTIFACT_SCAN_JOB}'"),
                StructuralCheck::NeedsIncludes {
                    job: DOCKER_JOB.to_string(),
                    dependency: ARTIFACT_SCAN_JOB.to_string(),
                },
            ),
        ],
    )
}

/// Required headings of the security-scanning documentation.
pub fn documentation(source: &str) -> Result<RuleSet<TextCheck>, RuleSetError> {
    let rules = REQUIRED_SECTIONS
        .iter()
        .map(|heading| {
            Rule::new(
                format!("docs.section.{}", slug(heading)),
                format!("documentation has section '{heading}'"),
                TextCheck::SectionPresent {
                    heading: (*heading).to_string(),
                },
            )
        })
        .collect();
    RuleSet::new("Security Documentation", source, rules)
}

/// Existence, `needs: build`, and `security-events: write` for a scan job.
fn scan_job_rules(job: &str) -> Vec<Rule<StructuralCheck>> {
    vec![
        Rule::new(
            format!("{job}.exists"),
            format!("job '{job}' is defined"),
            StructuralCheck::KeyExists {
                path: job_path(job),
            },
        ),
        Rule::new(
            format!("{job}.needs.{BUILD_JOB}"),
            format!("job '{job}' depends on '{BUILD_JOB}'"),
            StructuralCheck::NeedsIncludes {
                job: job.to_string(),
                dependency: BUILD_JOB.to_string(),
            },
        ),
        Rule::new(
            format!("{job}.permissions.{SECURITY_EVENTS_PERMISSION}"),
            format!("job '{job}' grants '{SECURITY_EVENTS_PERMISSION}: write'"),
            StructuralCheck::ScalarEquals {
                path: job_path(job)
                    .key("permissions")
                    .key(SECURITY_EVENTS_PERMISSION),
                expected: "write".to_string(),
            },
        ),
    ]
}

/// Lowercase kebab-case form of a step name or heading, for rule ids.
fn slug(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
