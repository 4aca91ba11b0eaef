//! # Loaders
//!
//! Turns files on disk into the inputs the runner consumes. Workflows are
//! parsed with `serde_yaml` and converted into a [`DocumentNode`] tree;
//! documentation is read as raw text.
//!
//! Loading never panics and never returns an I/O error directly: a missing
//! file becomes [`LoadError::ResourceMissing`] and every other problem
//! becomes [`LoadError::LoadFailure`] with a human-readable reason.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use wfcheck_core::{DocumentNode, LoadError};

/// Load and parse a YAML workflow.
///
/// `resource` names the input in any error; callers usually pass the path
/// relative to the repository root.
pub fn load_document(path: &Path, resource: &str) -> Result<DocumentNode, LoadError> {
    let content = read(path, resource)?;
    let document = parse_document(&content, resource)?;
    tracing::debug!(resource, "loaded document");
    Ok(document)
}

/// Load a text resource.
pub fn load_text(path: &Path, resource: &str) -> Result<String, LoadError> {
    let content = read(path, resource)?;
    tracing::debug!(resource, bytes = content.len(), "loaded text");
    Ok(content)
}

/// Parse YAML source into a document tree.
pub fn parse_document(content: &str, resource: &str) -> Result<DocumentNode, LoadError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| LoadError::LoadFailure {
            resource: resource.to_string(),
            reason: format!("invalid YAML: {e}"),
        })?;
    yaml_to_document(&value).map_err(|reason| LoadError::LoadFailure {
        resource: resource.to_string(),
        reason,
    })
}

fn read(path: &Path, resource: &str) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::ResourceMissing {
            resource: resource.to_string(),
        },
        _ => LoadError::LoadFailure {
            resource: resource.to_string(),
            reason: format!("cannot read file: {e}"),
        },
    })
}

/// Convert a `serde_yaml::Value` into a [`DocumentNode`].
///
/// Numbers become string scalars holding their YAML text. Scalar mapping
/// keys are stringified; sequence or mapping keys are rejected. Tags are
/// dropped and their inner value kept.
fn yaml_to_document(yaml: &serde_yaml::Value) -> Result<DocumentNode, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(DocumentNode::null()),
        serde_yaml::Value::Bool(b) => Ok(DocumentNode::bool(*b)),
        serde_yaml::Value::Number(n) => Ok(DocumentNode::string(n.to_string())),
        serde_yaml::Value::String(s) => Ok(DocumentNode::string(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<DocumentNode>, String> =
                seq.iter().map(yaml_to_document).collect();
            Ok(DocumentNode::Sequence(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut entries = BTreeMap::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Null => "null".to_string(),
                    other => return Err(format!("unsupported YAML map key: {other:?}")),
                };
                entries.insert(key, yaml_to_document(v)?);
            }
            Ok(DocumentNode::Mapping(entries))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_document(&tagged.value),
    }
}
