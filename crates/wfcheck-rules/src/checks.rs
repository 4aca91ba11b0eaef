//! # Checks
//!
//! The two families of checks a rule can carry.
//!
//! ## Structural Checks
//!
//! Operate on a workflow [`DocumentNode`]:
//!
//! - [`StructuralCheck::KeyExists`]: a key is present at a path.
//! - [`StructuralCheck::ScalarEquals`]: a string scalar at a path equals an
//!   expected value. `null`, booleans, and non-scalars never match.
//! - [`StructuralCheck::StepNamed`]: some step of a job has a name that
//!   *contains* a required substring. Matching is case-sensitive substring
//!   containment and ignores step order, so `Run Trivy vulnerability scanner
//!   on build artifacts (fs)` satisfies `Run Trivy vulnerability scanner on
//!   build artifacts`.
//! - [`StructuralCheck::NeedsIncludes`]: a job lists another job in `needs`,
//!   whether `needs` is a single name or a list.
//!
//! ## Textual Checks
//!
//! Operate on a raw text blob:
//!
//! - [`TextCheck::SectionPresent`]: a heading occurs verbatim somewhere in
//!   the text. Heading order is not checked.

use wfcheck_core::{DocPath, DocumentNode, Job, NodeKind, RuleFailure, Scalar};

use crate::rule::Check;

/// A check over a parsed workflow document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralCheck {
    KeyExists { path: DocPath },
    ScalarEquals { path: DocPath, expected: String },
    StepNamed { job: String, substring: String },
    NeedsIncludes { job: String, dependency: String },
}

impl Check for StructuralCheck {
    type Input = DocumentNode;

    fn evaluate(&self, document: &DocumentNode) -> Result<String, RuleFailure> {
        match self {
            StructuralCheck::KeyExists { path } => {
                document.lookup(path)?;
                Ok(format!("'{path}' is present"))
            }
            StructuralCheck::ScalarEquals { path, expected } => {
                let node = document.lookup(path)?;
                let scalar = node.as_scalar().ok_or(RuleFailure::UnexpectedNode {
                    path: path.clone(),
                    expected: NodeKind::String,
                    actual: node.kind(),
                })?;
                match scalar {
                    Scalar::String(actual) if actual == expected => {
                        Ok(format!("'{path}' is '{expected}'"))
                    }
                    other => Err(RuleFailure::ValueMismatch {
                        path: path.clone(),
                        expected: expected.clone(),
                        actual: other.to_string(),
                    }),
                }
            }
            StructuralCheck::StepNamed { job, substring } => {
                let names = Job::resolve(document, job)?.step_names()?;
                match names.iter().find(|name| name.contains(substring.as_str())) {
                    Some(name) => Ok(format!("job '{job}' has step '{name}'")),
                    None => Err(RuleFailure::MissingStep {
                        job: job.clone(),
                        required: substring.clone(),
                    }),
                }
            }
            StructuralCheck::NeedsIncludes { job, dependency } => {
                let needs = Job::resolve(document, job)?.needs()?;
                if needs.contains(&dependency.as_str()) {
                    Ok(format!("job '{job}' depends on '{dependency}'"))
                } else {
                    Err(RuleFailure::MissingDependency {
                        job: job.clone(),
                        dependency: dependency.clone(),
                    })
                }
            }
        }
    }
}

/// A check over a raw text blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCheck {
    SectionPresent { heading: String },
}

impl Check for TextCheck {
    type Input = str;

    fn evaluate(&self, text: &str) -> Result<String, RuleFailure> {
        match self {
            TextCheck::SectionPresent { heading } => {
                if text.contains(heading.as_str()) {
                    Ok(format!("found section '{heading}'"))
                } else {
                    Err(RuleFailure::MissingSection {
                        heading: heading.clone(),
                    })
                }
            }
        }
    }
}
