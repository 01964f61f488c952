//! Plain-text outline of a tree.

use super::node::Node;

/// Attributes shown next to each node in an outline.
const OUTLINE_ATTRIBUTES: &[&str] = &["ID", "name", "sub_tree_name", "service_name"];

/// Render the tree rooted at `root` as one line per node.
///
/// ```text
/// ├─ Sequence(control)
///    ├─ Action(action) ID="Wait"
/// ```
pub fn render_outline(root: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    outline_node(root, "", &mut lines);
    lines
}

fn outline_node(node: &Node, prefix: &str, lines: &mut Vec<String>) {
    let attrs: Vec<String> = node
        .attributes()
        .iter()
        .filter(|(name, _)| OUTLINE_ATTRIBUTES.contains(&name.as_str()))
        .map(|(name, value)| format!("{}=\"{}\"", name, value))
        .collect();

    let mut line = format!("{}├─ {}({})", prefix, node.tag(), node.kind());
    if !attrs.is_empty() {
        line.push(' ');
        line.push_str(&attrs.join(" "));
    }
    lines.push(line);

    let last = node.children().len().saturating_sub(1);
    for (i, child) in node.children().iter().enumerate() {
        let child_prefix = if i == last {
            format!("{}   ", prefix)
        } else {
            format!("{}│  ", prefix)
        };
        outline_node(child, &child_prefix, lines);
    }
}
