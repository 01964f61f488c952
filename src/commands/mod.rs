//! Command implementations for btdiff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler prints its output to stdout and returns the
//! process exit code for the success path.

mod compare;
mod show;
mod stats;

#[cfg(test)]
mod tests;

pub use compare::{CompareOutput, cmd_compare, run_compare};
pub use show::{cmd_show, render_show};
pub use stats::{cmd_stats, render_stats};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// Resolves the config once, then routes to the handler.
pub fn dispatch(cli: Cli) -> Result<i32> {
    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Command::Compare(args) => cmd_compare(args, &config),
        Command::Show(args) => cmd_show(args, &config),
        Command::Stats(args) => cmd_stats(args),
    }
}
