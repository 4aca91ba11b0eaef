//! # Rules Subcommand
//!
//! Lists the security-scanning catalog without loading any input.

use anyhow::{Context, Result};
use clap::Args;

use wfcheck_rules::catalog;

use crate::config::WfcheckConfig;
use crate::output::{render_rules, OutputFormat};
use crate::EXIT_OK;

/// Arguments for the `wfcheck rules` subcommand.
#[derive(Args, Debug, Default)]
pub struct RulesArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the rules subcommand.
pub fn run_rules(args: &RulesArgs, config: &WfcheckConfig) -> Result<u8> {
    let rule_sets = catalog::security_scanning(&config.sources())
        .context("failed to build the security-scanning catalog")?;
    print!("{}", render_rules(&rule_sets, args.format)?);
    Ok(EXIT_OK)
}
