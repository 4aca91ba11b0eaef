//! # Configuration
//!
//! Optional YAML file naming the inputs to validate. Every field has a
//! default, so an empty file and no file at all behave the same:
//!
//! ```yaml
//! primary_workflow: .github/workflows/ci.yml
//! secondary_workflow: .github/workflows/ci-cd.yml
//! documentation: .github/CI_SECURITY_SCANNING.md
//! ```
//!
//! Paths are relative to the repository root unless absolute.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use wfcheck_rules::catalog::{self, CatalogSources};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WfcheckConfig {
    pub primary_workflow: PathBuf,
    pub secondary_workflow: PathBuf,
    pub documentation: PathBuf,
}

impl Default for WfcheckConfig {
    fn default() -> Self {
        Self {
            primary_workflow: PathBuf::from(catalog::PRIMARY_WORKFLOW),
            secondary_workflow: PathBuf::from(catalog::SECONDARY_WORKFLOW),
            documentation: PathBuf::from(catalog::DOCUMENTATION),
        }
    }
}

impl WfcheckConfig {
    /// Read a config file, or return the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Source names as the catalog and the reports will show them.
    pub fn sources(&self) -> CatalogSources {
        CatalogSources {
            primary_workflow: self.primary_workflow.display().to_string(),
            secondary_workflow: self.secondary_workflow.display().to_string(),
            documentation: self.documentation.display().to_string(),
        }
    }
}
