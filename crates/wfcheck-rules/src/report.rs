//! # Verdicts, Reports, and Summaries
//!
//! A [`Verdict`] is the outcome of one rule. A [`Report`] groups the
//! verdicts of one rule set. [`summarize`] folds all reports of a run into
//! a single [`Summary`].
//!
//! ## Invariants
//!
//! - A verdict passes exactly when it carries no [`Failure`]; a failing
//!   verdict's message is the failure's rendering and is never empty.
//! - [`Report::passed`] is the conjunction of its verdicts, computed once at
//!   construction from nothing but the verdicts.

use serde::Serialize;
use wfcheck_core::{Failure, LoadError};

/// Rule id used for the single verdict emitted when an input failed to load.
pub const LOAD_RULE_ID: &str = "load";

/// Outcome of evaluating one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    rule_id: String,
    passed: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<Failure>,
}

impl Verdict {
    /// A passing verdict.
    pub fn pass(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            passed: true,
            message: message.into(),
            failure: None,
        }
    }

    /// A failing verdict; the message is derived from the failure.
    pub fn fail(rule_id: impl Into<String>, failure: impl Into<Failure>) -> Self {
        let failure = failure.into();
        Self {
            rule_id: rule_id.into(),
            passed: false,
            message: failure.to_string(),
            failure: Some(failure),
        }
    }

    /// The verdict standing in for every rule of an input that did not load.
    pub fn load_error(error: &LoadError) -> Self {
        Self::fail(LOAD_RULE_ID, error.clone())
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }
}

/// The verdicts of one rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    section: String,
    passed: bool,
    verdicts: Vec<Verdict>,
}

impl Report {
    pub fn new(section: impl Into<String>, verdicts: Vec<Verdict>) -> Self {
        let passed = verdicts.iter().all(Verdict::passed);
        Self {
            section: section.into(),
            passed,
            verdicts,
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    /// True iff every verdict passed. A report with no verdicts passes.
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Verdicts that did not pass, in declaration order.
    pub fn failures(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.passed())
    }
}

/// Overall outcome of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed_count: usize,
    pub total_count: usize,
    pub overall_passed: bool,
}

/// Fold the reports of a run into a [`Summary`].
///
/// The run passes iff every report passed. An empty run passes.
pub fn summarize(reports: &[Report]) -> Summary {
    let passed_count = reports.iter().filter(|r| r.passed()).count();
    Summary {
        passed_count,
        total_count: reports.len(),
        overall_passed: passed_count == reports.len(),
    }
}
