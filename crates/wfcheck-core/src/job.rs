//! # Job Accessors
//!
//! Typed views over a job mapping inside a workflow's `jobs` section. A job
//! may carry `needs`, `permissions`, and `steps`; each accessor reports an
//! absent key as [`RuleFailure::MissingKey`] and a key of the wrong shape as
//! [`RuleFailure::UnexpectedNode`].
//!
//! ## `needs` Normalization
//!
//! `needs: build` and `needs: [build]` are both valid encodings of the same
//! dependency edge. [`Job::needs`] always returns a list so that membership
//! checks give the same answer for either form.

use crate::document::{DocumentNode, NodeKind, Scalar};
use crate::error::RuleFailure;
use crate::path::DocPath;

/// A named job resolved from a workflow document.
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    name: &'a str,
    document: &'a DocumentNode,
    node: &'a DocumentNode,
}

/// Path of the `jobs.<name>` mapping.
pub fn job_path(name: &str) -> DocPath {
    DocPath::from_keys(["jobs", name])
}

impl<'a> Job<'a> {
    /// Resolve `jobs.<name>` in a workflow document.
    pub fn resolve(document: &'a DocumentNode, name: &'a str) -> Result<Self, RuleFailure> {
        let path = job_path(name);
        let node = document.lookup(&path)?;
        if node.as_mapping().is_none() {
            return Err(RuleFailure::UnexpectedNode {
                path,
                expected: NodeKind::Mapping,
                actual: node.kind(),
            });
        }
        Ok(Self {
            name,
            document,
            node,
        })
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn path(&self) -> DocPath {
        job_path(self.name)
    }

    pub fn node(&self) -> &'a DocumentNode {
        self.node
    }

    /// Upstream job names from `needs`, normalized to a list.
    pub fn needs(&self) -> Result<Vec<&'a str>, RuleFailure> {
        let path = self.path().key("needs");
        let needs = self
            .node
            .get("needs")
            .ok_or_else(|| RuleFailure::MissingKey { path: path.clone() })?;
        normalize_needs(needs, &path)
    }

    /// The value granted to `permission` in the job's `permissions` mapping.
    pub fn permission(&self, permission: &str) -> Result<&'a Scalar, RuleFailure> {
        let path = self.path().key("permissions").key(permission);
        let node = self.document.lookup(&path)?;
        node.as_scalar().ok_or(RuleFailure::UnexpectedNode {
            path,
            expected: NodeKind::String,
            actual: node.kind(),
        })
    }

    /// Names of the job's steps, in declaration order.
    ///
    /// Steps without a string `name` are skipped; they can never satisfy a
    /// name check.
    pub fn step_names(&self) -> Result<Vec<&'a str>, RuleFailure> {
        let path = self.path().key("steps");
        let steps = self
            .node
            .get("steps")
            .ok_or_else(|| RuleFailure::MissingKey { path: path.clone() })?;
        let items = steps.as_sequence().ok_or(RuleFailure::UnexpectedNode {
            path,
            expected: NodeKind::Sequence,
            actual: steps.kind(),
        })?;
        Ok(items
            .iter()
            .filter_map(|step| step.get("name").and_then(DocumentNode::as_str))
            .collect())
    }
}

/// Normalize a `needs` value to a list of job names.
///
/// A string scalar becomes a one-element list; a sequence must contain only
/// string scalars.
pub fn normalize_needs<'a>(
    needs: &'a DocumentNode,
    path: &DocPath,
) -> Result<Vec<&'a str>, RuleFailure> {
    match needs {
        DocumentNode::Scalar(Scalar::String(name)) => Ok(vec![name.as_str()]),
        DocumentNode::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str().ok_or(RuleFailure::UnexpectedNode {
                    path: path.index(i),
                    expected: NodeKind::String,
                    actual: item.kind(),
                })
            })
            .collect(),
        other => Err(RuleFailure::UnexpectedNode {
            path: path.clone(),
            expected: NodeKind::Sequence,
            actual: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(entries: Vec<(&str, DocumentNode)>) -> DocumentNode {
        DocumentNode::mapping([(
            "jobs",
            DocumentNode::mapping([("security-scan", DocumentNode::mapping(entries))]),
        )])
    }

    fn step(name: &str) -> DocumentNode {
        DocumentNode::mapping([("name", DocumentNode::string(name))])
    }

    #[test]
    fn resolve_missing_job_reports_job_path() {
        let doc = job(vec![]);
        let err = Job::resolve(&doc, "docker").unwrap_err();
        assert_eq!(err.to_string(), "missing key 'jobs.docker'");
    }

    #[test]
    fn resolve_rejects_scalar_job() {
        let doc = DocumentNode::mapping([(
            "jobs",
            DocumentNode::mapping([("docker", DocumentNode::string("oops"))]),
        )]);
        let err = Job::resolve(&doc, "docker").unwrap_err();
        assert!(matches!(err, RuleFailure::UnexpectedNode { .. }));
    }

    #[test]
    fn needs_scalar_and_sequence_normalize_identically() {
        let scalar = job(vec![("needs", DocumentNode::string("build"))]);
        let sequence = job(vec![(
            "needs",
            DocumentNode::sequence([DocumentNode::string("build")]),
        )]);
        let a = Job::resolve(&scalar, "security-scan").unwrap().needs().unwrap();
        let b = Job::resolve(&sequence, "security-scan").unwrap().needs().unwrap();
        assert_eq!(a, vec!["build"]);
        assert_eq!(a, b);
    }

    #[test]
    fn needs_absent_is_missing_key() {
        let doc = job(vec![]);
        let err = Job::resolve(&doc, "security-scan").unwrap().needs().unwrap_err();
        assert_eq!(err.to_string(), "missing key 'jobs.security-scan.needs'");
    }

    #[test]
    fn needs_with_non_string_entry_names_index() {
        let doc = job(vec![(
            "needs",
            DocumentNode::sequence([DocumentNode::string("build"), DocumentNode::bool(true)]),
        )]);
        let err = Job::resolve(&doc, "security-scan").unwrap().needs().unwrap_err();
        assert_eq!(
            err,
            RuleFailure::UnexpectedNode {
                path: DocPath::parse("jobs.security-scan.needs").index(1),
                expected: NodeKind::String,
                actual: NodeKind::Bool,
            }
        );
    }

    #[test]
    fn permission_paths_are_absolute() {
        let doc = job(vec![(
            "permissions",
            DocumentNode::mapping([("contents", DocumentNode::string("read"))]),
        )]);
        let scan = Job::resolve(&doc, "security-scan").unwrap();
        assert_eq!(scan.permission("contents").unwrap().as_str(), Some("read"));

        let err = scan.permission("security-events").unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing key 'jobs.security-scan.permissions.security-events'"
        );
    }

    #[test]
    fn permission_shorthand_string_is_unexpected_node() {
        let doc = job(vec![("permissions", DocumentNode::string("write-all"))]);
        let err = Job::resolve(&doc, "security-scan")
            .unwrap()
            .permission("security-events")
            .unwrap_err();
        assert_eq!(
            err,
            RuleFailure::UnexpectedNode {
                path: DocPath::parse("jobs.security-scan.permissions"),
                expected: NodeKind::Mapping,
                actual: NodeKind::String,
            }
        );
    }

    #[test]
    fn step_names_skip_unnamed_steps() {
        let doc = job(vec![(
            "steps",
            DocumentNode::sequence([
                step("Checkout"),
                DocumentNode::mapping([("uses", DocumentNode::string("actions/cache@v4"))]),
                step("Run tests"),
            ]),
        )]);
        let names = Job::resolve(&doc, "security-scan").unwrap().step_names().unwrap();
        assert_eq!(names, vec!["Checkout", "Run tests"]);
    }

    #[test]
    fn step_names_require_sequence() {
        let doc = job(vec![("steps", DocumentNode::mapping([("name", DocumentNode::string("x"))]))]);
        let err = Job::resolve(&doc, "security-scan").unwrap().step_names().unwrap_err();
        assert_eq!(
            err.to_string(),
            "'jobs.security-scan.steps' is a mapping, expected a sequence"
        );
    }
}
