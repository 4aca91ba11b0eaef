//! # wfcheck-cli — Command-Line Shell for wfcheck
//!
//! Provides the `wfcheck` binary. Everything with side effects lives here:
//! choosing which files to load, reading the optional config file, printing
//! reports, and turning the summary into an exit code.
//!
//! ## Subcommands
//!
//! - `wfcheck check` — load the workflows and documentation, run the
//!   security-scanning catalog, print the reports.
//! - `wfcheck rules` — list the catalog's rule sets and rules.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | every report passed |
//! | 1 | at least one report failed |
//! | 2 | operational error (unreadable or invalid config) |

pub mod check;
pub mod config;
pub mod output;
pub mod rules;

use std::path::{Path, PathBuf};

/// Exit code when every report passed.
pub const EXIT_OK: u8 = 0;
/// Exit code when at least one report failed.
pub const EXIT_FAILED: u8 = 1;
/// Exit code for operational errors.
pub const EXIT_ERROR: u8 = 2;

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo_root.join(path)
    }
}
