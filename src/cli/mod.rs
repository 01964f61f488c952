//! CLI argument parsing for btdiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// btdiff: structural diff for BehaviorTree.CPP XML files.
///
/// Nodes are matched by canonical path. Nodes that keep their identity but
/// change position are reported as moves instead of a removal plus an
/// addition.
#[derive(Parser, Debug)]
#[command(name = "btdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (default: .btdiff.yaml in the current directory, if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands for btdiff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two behavior-tree XML files.
    ///
    /// Compares one selected tree, or every tree defined in both files with
    /// `--all`.
    Compare(CompareArgs),

    /// Print the outline of one tree.
    Show(ShowArgs),

    /// Print node statistics for a file.
    Stats(StatsArgs),
}

/// Arguments for the `compare` command.
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// The old (before) XML file.
    pub old: PathBuf,

    /// The new (after) XML file.
    pub new: PathBuf,

    /// Tree to compare (skips hint-based selection).
    #[arg(long, conflicts_with = "all")]
    pub tree: Option<String>,

    /// Node identifier involved in the change; used to pick the tree.
    #[arg(long = "hint", value_name = "ID")]
    pub hints: Vec<String>,

    /// Output format (default: from config, else text).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also list unchanged nodes.
    #[arg(long)]
    pub show_unchanged: bool,

    /// Compare every shared tree plus SubTree references.
    #[arg(long)]
    pub all: bool,

    /// Exit with a distinct code when differences are found.
    #[arg(long)]
    pub exit_code: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// The XML file.
    pub file: PathBuf,

    /// Tree to print (default: the configured default tree, else the first).
    #[arg(long)]
    pub tree: Option<String>,
}

/// Arguments for the `stats` command.
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// The XML file.
    pub file: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
