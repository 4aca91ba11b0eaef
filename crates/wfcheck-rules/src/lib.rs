//! # wfcheck-rules — Conformance Rule Engine
//!
//! Evaluates named rules against parsed workflow documents and companion
//! documentation, and aggregates the outcomes into reports.
//!
//! ## Pipeline
//!
//! ```text
//! loader ──► DocumentNode / text ──► RuleSet::run ──► Report ──► summarize
//! ```
//!
//! - [`rule`]: the [`Check`] trait, [`Rule`], and [`RuleSet`].
//! - [`checks`]: structural checks over a document tree and textual checks
//!   over a text blob.
//! - [`runner`]: runs every rule of every rule set against its loaded
//!   source and emits one [`Report`] per rule set.
//! - [`report`]: [`Verdict`], [`Report`], and [`summarize`].
//! - [`catalog`]: the security-scanning rule sets.
//! - [`loader`]: reads YAML workflows and text files from disk.
//!
//! ## Crate Policy
//!
//! - Rules are pure. They borrow their input, never mutate it, and never
//!   observe another rule's outcome.
//! - No failure crosses the rule/runner boundary as an `Err`; every failure
//!   becomes a [`Verdict`].
//! - Only [`loader`] touches the filesystem.

pub mod catalog;
pub mod checks;
pub mod loader;
pub mod report;
pub mod rule;
pub mod runner;

pub use catalog::{security_scanning, CatalogSources};
pub use checks::{StructuralCheck, TextCheck};
pub use loader::{load_document, load_text, parse_document};
pub use report::{summarize, Report, Summary, Verdict};
pub use rule::{Check, Rule, RuleSet, RuleSetError};
pub use runner::{run_validation, syntax_report, AnyRuleSet, LoadedDocuments};
