//! # wfcheck CLI entry point
//!
//! Parses command-line arguments, initializes tracing, loads the optional
//! config file, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wfcheck_cli::check::{run_check, CheckArgs};
use wfcheck_cli::config::WfcheckConfig;
use wfcheck_cli::rules::{run_rules, RulesArgs};
use wfcheck_cli::EXIT_ERROR;

/// Conformance checks for CI security-scanning workflows.
///
/// Verifies that the CI workflows define correctly wired security-scan jobs
/// and that the security-scanning documentation has every required section.
#[derive(Parser, Debug)]
#[command(name = "wfcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Repository root that workflow and documentation paths are relative to.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the workflows and documentation.
    Check(CheckArgs),

    /// List every rule set and rule.
    Rules(RulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let repo_root = cli.root.unwrap_or_else(|| {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    });
    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let result = WfcheckConfig::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Check(args) => run_check(&args, &repo_root, &config),
        Commands::Rules(args) => run_rules(&args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
