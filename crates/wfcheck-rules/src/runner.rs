//! # Validation Runner
//!
//! Runs a list of rule sets against the inputs a loader produced and returns
//! one [`Report`] per rule set, in declaration order.
//!
//! Each rule set names its source. The runner looks the source up in
//! [`LoadedDocuments`]; a source that failed to load yields a report with a
//! single load verdict, and a source that was never supplied is treated as
//! [`LoadError::ResourceMissing`].
//!
//! Execution is sequential and deterministic. Inputs are only borrowed.

use wfcheck_core::{DocumentNode, LoadError};

use crate::checks::{StructuralCheck, TextCheck};
use crate::report::{Report, Verdict};
use crate::rule::RuleSet;

/// A rule set of either family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyRuleSet {
    Document(RuleSet<StructuralCheck>),
    Text(RuleSet<TextCheck>),
}

impl AnyRuleSet {
    pub fn name(&self) -> &str {
        match self {
            AnyRuleSet::Document(set) => set.name(),
            AnyRuleSet::Text(set) => set.name(),
        }
    }

    pub fn source(&self) -> &str {
        match self {
            AnyRuleSet::Document(set) => set.source(),
            AnyRuleSet::Text(set) => set.source(),
        }
    }

    /// `(id, description)` of every rule, in declaration order.
    pub fn rule_descriptions(&self) -> Vec<(&str, &str)> {
        match self {
            AnyRuleSet::Document(set) => set
                .rules()
                .iter()
                .map(|r| (r.id(), r.description()))
                .collect(),
            AnyRuleSet::Text(set) => set
                .rules()
                .iter()
                .map(|r| (r.id(), r.description()))
                .collect(),
        }
    }
}

impl From<RuleSet<StructuralCheck>> for AnyRuleSet {
    fn from(set: RuleSet<StructuralCheck>) -> Self {
        AnyRuleSet::Document(set)
    }
}

impl From<RuleSet<TextCheck>> for AnyRuleSet {
    fn from(set: RuleSet<TextCheck>) -> Self {
        AnyRuleSet::Text(set)
    }
}

/// Inputs handed to the runner, keyed by source name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct LoadedDocuments {
    documents: Vec<(String, Result<DocumentNode, LoadError>)>,
    texts: Vec<(String, Result<String, LoadError>)>,
}

impl LoadedDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of loading a structured document.
    ///
    /// Inserting the same source twice replaces the earlier outcome.
    pub fn insert_document(
        &mut self,
        source: impl Into<String>,
        loaded: Result<DocumentNode, LoadError>,
    ) -> &mut Self {
        upsert(&mut self.documents, source.into(), loaded);
        self
    }

    /// Record the outcome of loading a text resource.
    pub fn insert_text(
        &mut self,
        source: impl Into<String>,
        loaded: Result<String, LoadError>,
    ) -> &mut Self {
        upsert(&mut self.texts, source.into(), loaded);
        self
    }

    pub fn document(&self, source: &str) -> Option<Result<&DocumentNode, &LoadError>> {
        self.documents
            .iter()
            .find(|(name, _)| name == source)
            .map(|(_, loaded)| loaded.as_ref())
    }

    pub fn text(&self, source: &str) -> Option<Result<&str, &LoadError>> {
        self.texts
            .iter()
            .find(|(name, _)| name == source)
            .map(|(_, loaded)| loaded.as_ref().map(String::as_str))
    }

    /// Structured documents, in insertion order.
    pub fn documents(&self) -> impl Iterator<Item = (&str, Result<&DocumentNode, &LoadError>)> {
        self.documents
            .iter()
            .map(|(name, loaded)| (name.as_str(), loaded.as_ref()))
    }
}

fn upsert<T>(entries: &mut Vec<(String, T)>, source: String, loaded: T) {
    match entries.iter_mut().find(|(name, _)| *name == source) {
        Some(entry) => entry.1 = loaded,
        None => entries.push((source, loaded)),
    }
}

/// Run every rule set against its source.
pub fn run_validation(rule_sets: &[AnyRuleSet], loaded: &LoadedDocuments) -> Vec<Report> {
    rule_sets
        .iter()
        .map(|rule_set| {
            tracing::debug!(
                rule_set = rule_set.name(),
                source = rule_set.source(),
                "running rule set"
            );
            match rule_set {
                AnyRuleSet::Document(set) => match loaded.document(set.source()) {
                    Some(input) => set.run(input),
                    None => set.run(Err(&not_supplied(set.source()))),
                },
                AnyRuleSet::Text(set) => match loaded.text(set.source()) {
                    Some(input) => set.run(input),
                    None => set.run(Err(&not_supplied(set.source()))),
                },
            }
        })
        .collect()
}

fn not_supplied(source: &str) -> LoadError {
    LoadError::ResourceMissing {
        resource: source.to_string(),
    }
}

/// One verdict per structured document: passes when it parsed.
pub fn syntax_report(section: impl Into<String>, loaded: &LoadedDocuments) -> Report {
    let verdicts = loaded
        .documents()
        .map(|(source, outcome)| {
            let rule_id = format!("syntax.{source}");
            match outcome {
                Ok(_) => Verdict::pass(rule_id, format!("{source} has valid syntax")),
                Err(error) => Verdict::fail(rule_id, error.clone()),
            }
        })
        .collect();
    Report::new(section, verdicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use wfcheck_core::{DocPath, Failure};

    fn docs_set() -> AnyRuleSet {
        RuleSet::new(
            "Docs",
            "docs.md",
            vec![Rule::new(
                "docs.title",
                "has title",
                TextCheck::SectionPresent {
                    heading: "# Title".to_string(),
                },
            )],
        )
        .unwrap()
        .into()
    }

    fn job_set() -> AnyRuleSet {
        RuleSet::new(
            "Build job",
            "ci.yml",
            vec![Rule::new(
                "build.exists",
                "build job exists",
                StructuralCheck::KeyExists {
                    path: DocPath::parse("jobs.build"),
                },
            )],
        )
        .unwrap()
        .into()
    }

    #[test]
    fn reports_follow_rule_set_order() {
        let mut loaded = LoadedDocuments::new();
        loaded
            .insert_text("docs.md", Ok("# Title".to_string()))
            .insert_document(
                "ci.yml",
                Ok(DocumentNode::mapping([(
                    "jobs",
                    DocumentNode::mapping([("build", DocumentNode::mapping(Vec::<(String, _)>::new()))]),
                )])),
            );
        let reports = run_validation(&[job_set(), docs_set()], &loaded);
        let sections: Vec<&str> = reports.iter().map(Report::section).collect();
        assert_eq!(sections, vec!["Build job", "Docs"]);
        assert!(reports.iter().all(Report::passed));
    }

    #[test]
    fn unsupplied_source_is_resource_missing() {
        let reports = run_validation(&[docs_set()], &LoadedDocuments::new());
        let verdicts = reports[0].verdicts();
        assert_eq!(verdicts.len(), 1);
        assert!(matches!(
            verdicts[0].failure(),
            Some(Failure::Load(LoadError::ResourceMissing { .. }))
        ));
    }

    #[test]
    fn syntax_report_has_one_verdict_per_document() {
        let mut loaded = LoadedDocuments::new();
        loaded
            .insert_document("ci.yml", Ok(DocumentNode::null()))
            .insert_document(
                "ci-cd.yml",
                Err(LoadError::LoadFailure {
                    resource: "ci-cd.yml".to_string(),
                    reason: "invalid YAML".to_string(),
                }),
            )
            .insert_text("docs.md", Ok(String::new()));
        let report = syntax_report("Workflow syntax", &loaded);
        let outcomes: Vec<(&str, bool)> = report
            .verdicts()
            .iter()
            .map(|v| (v.rule_id(), v.passed()))
            .collect();
        assert_eq!(
            outcomes,
            vec![("syntax.ci.yml", true), ("syntax.ci-cd.yml", false)]
        );
    }

    #[test]
    fn reinserting_a_source_replaces_it() {
        let mut loaded = LoadedDocuments::new();
        loaded.insert_text("docs.md", Ok("old".to_string()));
        loaded.insert_text("docs.md", Ok("new".to_string()));
        assert_eq!(loaded.text("docs.md"), Some(Ok("new")));
    }
}
