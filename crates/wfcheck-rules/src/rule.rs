//! # Rules and Rule Sets
//!
//! A [`Rule`] pairs a stable id and a description with a [`Check`]. A
//! [`RuleSet`] is the ordered group of rules that applies to one input
//! source. The check type fixes what the rules inspect: a document tree for
//! [`StructuralCheck`](crate::StructuralCheck), a text blob for
//! [`TextCheck`](crate::TextCheck).

use std::collections::HashSet;

use thiserror::Error;
use wfcheck_core::{LoadError, RuleFailure};

use crate::report::{Report, Verdict};

/// A pure predicate over one kind of input.
pub trait Check {
    /// What the check inspects.
    type Input: ?Sized;

    /// Evaluate the check.
    ///
    /// Returns the message for a passing verdict, or the violation found.
    fn evaluate(&self, input: &Self::Input) -> Result<String, RuleFailure>;
}

/// Error building a rule set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("rule set '{rule_set}' declares rule id '{rule_id}' more than once")]
    DuplicateRuleId { rule_set: String, rule_id: String },
}

/// A single named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<C> {
    id: String,
    description: String,
    check: C,
}

impl<C: Check> Rule<C> {
    pub fn new(id: impl Into<String>, description: impl Into<String>, check: C) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            check,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn check(&self) -> &C {
        &self.check
    }

    /// Evaluate the rule against an input.
    pub fn evaluate(&self, input: &C::Input) -> Verdict {
        match self.check.evaluate(input) {
            Ok(message) => Verdict::pass(&self.id, message),
            Err(failure) => Verdict::fail(&self.id, failure),
        }
    }
}

/// The ordered rules applicable to one input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet<C> {
    name: String,
    source: String,
    rules: Vec<Rule<C>>,
}

impl<C: Check> RuleSet<C> {
    /// Build a rule set.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError::DuplicateRuleId`] if two rules share an id.
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        rules: Vec<Rule<C>>,
    ) -> Result<Self, RuleSetError> {
        let name = name.into();
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id()) {
                return Err(RuleSetError::DuplicateRuleId {
                    rule_set: name,
                    rule_id: rule.id().to_string(),
                });
            }
        }
        Ok(Self {
            name,
            source: source.into(),
            rules,
        })
    }

    /// Report section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the loaded input this rule set inspects.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn rules(&self) -> &[Rule<C>] {
        &self.rules
    }

    /// Run every rule in declaration order against a loaded input.
    ///
    /// A load error short-circuits: the report holds exactly one verdict
    /// describing it and no rule is evaluated.
    pub fn run(&self, input: Result<&C::Input, &LoadError>) -> Report {
        let input = match input {
            Ok(input) => input,
            Err(error) => {
                tracing::warn!(rule_set = %self.name, %error, "input unavailable; skipping rules");
                return Report::new(&self.name, vec![Verdict::load_error(error)]);
            }
        };

        let verdicts: Vec<Verdict> = self
            .rules
            .iter()
            .map(|rule| {
                let verdict = rule.evaluate(input);
                tracing::debug!(
                    rule_set = %self.name,
                    rule = rule.id(),
                    passed = verdict.passed(),
                    "evaluated rule"
                );
                verdict
            })
            .collect();

        let report = Report::new(&self.name, verdicts);
        tracing::info!(
            rule_set = %self.name,
            passed = report.passed(),
            failures = report.failures().count(),
            "rule set complete"
        );
        report
    }
}
