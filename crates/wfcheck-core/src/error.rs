//! # Error Types — Failure Taxonomy
//!
//! Two families, both using `thiserror`:
//!
//! - [`LoadError`]: the input never became a document or text blob. The
//!   runner reports it once and skips every rule for that input.
//! - [`RuleFailure`]: a single rule found a violation. Sibling rules still
//!   run.
//!
//! Neither family is fatal. The worst outcome of a validation run is a
//! failing summary; the CLI decides what exit code that maps to.

use serde::Serialize;
use thiserror::Error;

use crate::document::NodeKind;
use crate::path::DocPath;

/// A rule-level violation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleFailure {
    /// A required key is absent.
    #[error("missing key '{path}'")]
    MissingKey {
        /// Path up to and including the absent key.
        path: DocPath,
    },

    /// A scalar holds the wrong value.
    #[error("'{path}' is '{actual}', expected '{expected}'")]
    ValueMismatch {
        path: DocPath,
        expected: String,
        actual: String,
    },

    /// No step of a job has a name containing the required text.
    #[error("job '{job}' has no step whose name contains '{required}'")]
    MissingStep { job: String, required: String },

    /// A required heading does not occur in the text.
    #[error("missing section '{heading}'")]
    MissingSection { heading: String },

    /// A job does not list a required upstream job in `needs`.
    #[error("job '{job}' does not depend on '{dependency}'")]
    MissingDependency { job: String, dependency: String },

    /// A key is present but holds the wrong kind of node.
    #[error("'{path}' is a {actual}, expected a {expected}")]
    UnexpectedNode {
        path: DocPath,
        expected: NodeKind,
        actual: NodeKind,
    },
}

/// An input that could not be handed to the rules.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadError {
    /// The input exists but could not be read or parsed.
    #[error("failed to load '{resource}': {reason}")]
    LoadFailure { resource: String, reason: String },

    /// The input does not exist.
    #[error("'{resource}' does not exist")]
    ResourceMissing { resource: String },
}

impl LoadError {
    /// Name of the input this error is about.
    pub fn resource(&self) -> &str {
        match self {
            LoadError::LoadFailure { resource, .. } | LoadError::ResourceMissing { resource } => {
                resource
            }
        }
    }
}

/// Any failure a verdict can carry.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Failure {
    #[error(transparent)]
    Rule(#[from] RuleFailure),
    #[error(transparent)]
    Load(#[from] LoadError),
}
