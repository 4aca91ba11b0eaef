//! # wfcheck-core — Foundational Types for wfcheck
//!
//! This crate defines the data model every other crate in the workspace
//! builds on. It depends on nothing internal and performs no I/O.
//!
//! ## Key Design Principles
//!
//! 1. **One document model.** Workflows are handed to the rule engine as a
//!    [`DocumentNode`] tree: mappings, sequences, and scalars
//!    (string, bool, null). Loaders convert whatever they parse into this
//!    tree exactly once.
//!
//! 2. **Absent is not empty.** Accessors return `Option`, and path lookup
//!    reports the exact path at which it stopped. A missing key and a key
//!    holding the wrong kind of node are different failures.
//!
//! 3. **Typed failures.** Every way a rule can fail is a variant of
//!    [`RuleFailure`]; every way an input can fail to load is a variant of
//!    [`LoadError`]. Messages are derived from the variant, never free text.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `wfcheck-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod job;
pub mod path;

// Re-export primary types for ergonomic imports.
pub use document::{DocumentNode, NodeKind, Scalar};
pub use error::{Failure, LoadError, RuleFailure};
pub use job::Job;
pub use path::DocPath;
