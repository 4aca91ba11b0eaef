//! # Document Tree
//!
//! The in-memory representation of a parsed configuration file. A
//! [`DocumentNode`] is produced once per input by a loader and never
//! mutated afterwards; rules only ever borrow it.
//!
//! ## Absent vs. Empty
//!
//! Every accessor returns `Option` instead of a default value. A mapping
//! without a `permissions` key and a mapping whose `permissions` key holds
//! an empty mapping are observably different, and [`DocumentNode::lookup`]
//! turns the difference into distinct [`RuleFailure`] variants.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::RuleFailure;
use crate::path::DocPath;

/// A leaf value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    String(String),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Scalar::Null => NodeKind::Null,
            Scalar::Bool(_) => NodeKind::Bool,
            Scalar::String(_) => NodeKind::String,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

/// The shape of a node, used in failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Mapping,
    Sequence,
    String,
    Bool,
    Null,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
            NodeKind::String => "string",
            NodeKind::Bool => "bool",
            NodeKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// A node of a parsed configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    Mapping(BTreeMap<String, DocumentNode>),
    Sequence(Vec<DocumentNode>),
    Scalar(Scalar),
}

impl DocumentNode {
    /// A string scalar.
    pub fn string(value: impl Into<String>) -> Self {
        DocumentNode::Scalar(Scalar::String(value.into()))
    }

    /// A boolean scalar.
    pub fn bool(value: bool) -> Self {
        DocumentNode::Scalar(Scalar::Bool(value))
    }

    /// The null scalar.
    pub fn null() -> Self {
        DocumentNode::Scalar(Scalar::Null)
    }

    /// A mapping built from `(key, node)` pairs.
    pub fn mapping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, DocumentNode)>,
        K: Into<String>,
    {
        DocumentNode::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A sequence of nodes.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = DocumentNode>,
    {
        DocumentNode::Sequence(items.into_iter().collect())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            DocumentNode::Mapping(_) => NodeKind::Mapping,
            DocumentNode::Sequence(_) => NodeKind::Sequence,
            DocumentNode::Scalar(scalar) => scalar.kind(),
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, DocumentNode>> {
        match self {
            DocumentNode::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[DocumentNode]> {
        match self {
            DocumentNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            DocumentNode::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// The string value of a string scalar. Other scalars are not coerced.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Look up a direct child of a mapping.
    ///
    /// Returns `None` both when the key is absent and when `self` is not a
    /// mapping. Use [`DocumentNode::lookup`] when the caller needs to know
    /// which of the two happened.
    pub fn get(&self, key: &str) -> Option<&DocumentNode> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Resolve `path` relative to this node.
    ///
    /// # Errors
    ///
    /// - [`RuleFailure::MissingKey`] with the path up to and including the
    ///   first absent key or out-of-range index.
    /// - [`RuleFailure::UnexpectedNode`] when an intermediate node is not a
    ///   mapping (for a key segment) or not a sequence (for an index segment).
    pub fn lookup(&self, path: &DocPath) -> Result<&DocumentNode, RuleFailure> {
        use crate::path::Segment;

        let mut current = self;
        let mut walked = DocPath::root();
        for segment in path.segments() {
            match segment {
                Segment::Key(key) => {
                    let map = current.as_mapping().ok_or_else(|| RuleFailure::UnexpectedNode {
                        path: walked.clone(),
                        expected: NodeKind::Mapping,
                        actual: current.kind(),
                    })?;
                    walked = walked.key(key.as_str());
                    current = map
                        .get(key)
                        .ok_or_else(|| RuleFailure::MissingKey { path: walked.clone() })?;
                }
                Segment::Index(index) => {
                    let items =
                        current
                            .as_sequence()
                            .ok_or_else(|| RuleFailure::UnexpectedNode {
                                path: walked.clone(),
                                expected: NodeKind::Sequence,
                                actual: current.kind(),
                            })?;
                    walked = walked.index(*index);
                    current = items
                        .get(*index)
                        .ok_or_else(|| RuleFailure::MissingKey { path: walked.clone() })?;
                }
            }
        }
        Ok(current)
    }
}
