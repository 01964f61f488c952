//! Implementation of the `btdiff compare` command.

use crate::cli::CompareArgs;
use crate::compare::compare_with;
use crate::config::{Config, OutputFormat};
use crate::document_diff::{TreeDiff, compare_documents};
use crate::error::{BtDiffError, Result};
use crate::exit_codes;
use crate::parser::parse_file;
use crate::report::{Report, Sources, render_json, render_text};
use crate::select::{SelectionRule, select_tree};

/// Rendered result of a comparison.
#[derive(Debug, Clone)]
pub struct CompareOutput {
    /// Report text in the requested format.
    pub rendered: String,
    /// Whether the inputs differ.
    pub has_changes: bool,
}

/// Execute the `btdiff compare` command.
///
/// Returns `CHANGES_DETECTED` instead of `SUCCESS` when `--exit-code` is set
/// and the inputs differ.
pub fn cmd_compare(args: CompareArgs, config: &Config) -> Result<i32> {
    let output = run_compare(&args, config)?;
    println!("{}", output.rendered);

    if args.exit_code && output.has_changes {
        Ok(exit_codes::CHANGES_DETECTED)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Parse both files, diff them, and render the report.
pub fn run_compare(args: &CompareArgs, config: &Config) -> Result<CompareOutput> {
    let old_doc = parse_file(&args.old)?;
    let new_doc = parse_file(&args.new)?;
    let options = config.compare_options()?;
    let show_unchanged = args.show_unchanged || config.show_unchanged;
    let sources = Sources {
        old: args.old.display().to_string(),
        new: args.new.display().to_string(),
    };

    let report = if args.all {
        let diff = compare_documents(&old_doc, &new_doc, &options)?;
        Report::for_document(sources, &diff, show_unchanged)
    } else {
        let rule = SelectionRule {
            explicit: args.tree.clone(),
            hints: config.hints.iter().chain(&args.hints).cloned().collect(),
            default_tree: config.default_tree.clone(),
        };
        let selection = select_tree(&old_doc, &new_doc, &rule)?;

        let old_root = old_doc
            .get(&selection.name)
            .ok_or_else(|| BtDiffError::TreeNotFound {
                name: selection.name.clone(),
                side: "old",
            })?;
        let new_root = new_doc
            .get(&selection.name)
            .ok_or_else(|| BtDiffError::TreeNotFound {
                name: selection.name.clone(),
                side: "new",
            })?;

        let diff = TreeDiff {
            changes: compare_with(old_root, new_root, &options)?,
            name: selection.name,
        };
        Report::for_tree(sources, &diff, show_unchanged)
    };

    let rendered = match args.format.unwrap_or(config.output_format) {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };

    Ok(CompareOutput {
        rendered,
        has_changes: report.has_changes(),
    })
}
