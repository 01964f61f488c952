//! Implementation of the `btdiff show` command.

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{BtDiffError, Result};
use crate::exit_codes;
use crate::parser::parse_file;
use crate::tree::render_outline;

/// Execute the `btdiff show` command.
pub fn cmd_show(args: ShowArgs, config: &Config) -> Result<i32> {
    println!("{}", render_show(&args, config)?);
    Ok(exit_codes::SUCCESS)
}

/// Outline of the requested tree, headed by its name.
///
/// Without `--tree`, the configured default tree is shown if the file
/// defines it, else the first tree in the file.
pub fn render_show(args: &ShowArgs, config: &Config) -> Result<String> {
    let doc = parse_file(&args.file)?;

    let (name, root) = match &args.tree {
        Some(name) => {
            let root = doc.get(name).ok_or_else(|| BtDiffError::TreeNotFound {
                name: name.clone(),
                side: "input",
            })?;
            (name.as_str(), root)
        }
        None => doc.default_tree(&config.default_tree).ok_or_else(|| {
            BtDiffError::UserError(format!(
                "no behavior tree found in '{}'",
                args.file.display()
            ))
        })?,
    };

    let mut lines = vec![format!("Tree: {}", name)];
    lines.extend(render_outline(root));
    Ok(lines.join("\n"))
}
