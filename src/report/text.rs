//! Human-readable report output.

use super::model::{ChangeRecord, Report, SubtreeRefRecord, TreeReport};
use crate::compare::{AttributeDeltas, ChangeKind};

/// Render a report as plain text.
///
/// The output is deterministic: it omits the generation timestamp.
pub fn render_text(report: &Report) -> String {
    let mut lines = vec![
        "BehaviorTree XML Structural Diff".to_string(),
        "================================".to_string(),
        format!("Old file: {}", report.sources.old),
        format!("New file: {}", report.sources.new),
        String::new(),
    ];

    for tree in &report.trees {
        render_tree(tree, &mut lines);
    }

    if !report.added_trees.is_empty() {
        lines.push("Added trees:".to_string());
        lines.extend(report.added_trees.iter().map(|name| format!("  + {}", name)));
        lines.push(String::new());
    }
    if !report.removed_trees.is_empty() {
        lines.push("Removed trees:".to_string());
        lines.extend(report.removed_trees.iter().map(|name| format!("  - {}", name)));
        lines.push(String::new());
    }
    if !report.subtree_refs.is_empty() {
        lines.push("SubTree references:".to_string());
        for reference in &report.subtree_refs {
            render_subtree_ref(reference, &mut lines);
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn render_tree(tree: &TreeReport, lines: &mut Vec<String>) {
    lines.push(format!("Tree: {}", tree.name));
    lines.push(tree.summary.to_string());
    lines.push(String::new());

    if tree.changes.is_empty() {
        lines.push("No changes.".to_string());
        lines.push(String::new());
        return;
    }
    for change in &tree.changes {
        lines.push(format_change(change));
        lines.push(String::new());
    }
}

/// Format one change entry (may span several lines).
pub fn format_change(change: &ChangeRecord) -> String {
    let old_path = change.old_path.as_deref().unwrap_or("");
    let new_path = change.new_path.as_deref().unwrap_or("");

    match change.kind {
        ChangeKind::Added => format!("+ ADDED: {}\n  {}", new_path, format_node_info(change)),
        ChangeKind::Removed => format!("- REMOVED: {}\n  {}", old_path, format_node_info(change)),
        ChangeKind::Moved => format!(
            "→ MOVED: {} → {}\n  {}",
            old_path,
            new_path,
            format_node_info(change)
        ),
        ChangeKind::Unchanged => format!("  UNCHANGED: {}", old_path),
        ChangeKind::Modified => {
            let mut out = format!("* MODIFIED: {}", old_path);
            if let Some(delta) = &change.tag_delta {
                out.push_str(&format!("\n  Tag: '{}' → '{}'", delta.old, delta.new));
            }
            if let Some(delta) = &change.kind_delta {
                out.push_str(&format!("\n  Kind: '{}' → '{}'", delta.old, delta.new));
            }
            if !change.attribute_deltas.is_empty() {
                out.push_str("\n  Attribute changes:");
                out.push_str(&format_deltas(&change.attribute_deltas, "    "));
            }
            out
        }
    }
}

/// `Tag (kind) [ID='..', name='..']`
pub fn format_node_info(change: &ChangeRecord) -> String {
    let mut info = format!("{} ({})", change.tag, change.node_kind);
    if !change.identity.is_empty() {
        let attrs: Vec<String> = change
            .identity
            .iter()
            .map(|(name, value)| format!("{}='{}'", name, value))
            .collect();
        info.push_str(&format!(" [{}]", attrs.join(", ")));
    }
    info
}

fn format_deltas(deltas: &AttributeDeltas, indent: &str) -> String {
    deltas
        .iter()
        .map(|(name, delta)| format!("\n{}{}: '{}' → '{}'", indent, name, delta.old, delta.new))
        .collect()
}

fn render_subtree_ref(reference: &SubtreeRefRecord, lines: &mut Vec<String>) {
    let marker = match reference.kind {
        ChangeKind::Added => "+",
        ChangeKind::Removed => "-",
        _ => "*",
    };
    let mut line = format!("  {} {}", marker, reference.id);
    line.push_str(&format_deltas(&reference.attribute_deltas, "      "));
    lines.push(line);
}
