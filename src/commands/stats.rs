//! Implementation of the `btdiff stats` command.

use crate::cli::StatsArgs;
use crate::error::Result;
use crate::exit_codes;
use crate::parser::parse_file;
use crate::tree::DocumentStats;

/// Execute the `btdiff stats` command.
pub fn cmd_stats(args: StatsArgs) -> Result<i32> {
    println!("{}", render_stats(&args)?);
    Ok(exit_codes::SUCCESS)
}

/// Statistics block for one file.
pub fn render_stats(args: &StatsArgs) -> Result<String> {
    let doc = parse_file(&args.file)?;
    Ok(format!("File: {}\n{}", args.file.display(), DocumentStats::of(&doc)))
}
