//! Node signatures and move resolution.

use super::change::{Change, ChangeKind};
use super::index::PathIndex;
use crate::tree::Node;
use std::collections::{HashMap, HashSet};

/// Attributes that identify a node independently of its position.
pub const SIGNATURE_ATTRIBUTES: &[&str] = &["ID", "name", "sub_tree_name"];

/// Positional-independent fingerprint of a node, e.g. `Action(action):ID=A`.
///
/// Only used to pair moved nodes. Two nodes that agree on tag, kind and the
/// identifying attributes share a signature even if other attributes differ.
pub fn signature(node: &Node) -> String {
    let parts: Vec<String> = SIGNATURE_ATTRIBUTES
        .iter()
        .filter_map(|name| node.attribute(name).map(|value| format!("{}={}", name, value)))
        .collect();
    format!("{}({}):{}", node.tag(), node.kind(), parts.join(":"))
}

fn group_by_signature<'a>(index: &PathIndex<'a>) -> HashMap<String, Vec<&'a Node>> {
    let mut groups: HashMap<String, Vec<&'a Node>> = HashMap::new();
    for node in index.nodes() {
        groups.entry(signature(node)).or_default().push(node);
    }
    groups
}

/// Replace Removed/Added pairs that are the same node at a new position with a
/// single Moved change.
///
/// A pair is only formed when its signature occurs exactly once in each tree.
/// Each Moved change takes the slot of the Removed change it replaces.
pub(crate) fn resolve_moves<'a>(
    changes: Vec<Change<'a>>,
    old_index: &PathIndex<'a>,
    new_index: &PathIndex<'a>,
) -> Vec<Change<'a>> {
    let removed: HashSet<&str> = changes
        .iter()
        .filter(|c| c.kind() == ChangeKind::Removed)
        .filter_map(Change::old_path)
        .collect();
    let added: HashSet<&str> = changes
        .iter()
        .filter(|c| c.kind() == ChangeKind::Added)
        .filter_map(Change::new_path)
        .collect();

    let old_groups = group_by_signature(old_index);
    let new_groups = group_by_signature(new_index);

    let mut moves: HashMap<&'a str, &'a Node> = HashMap::new();
    let mut targets: HashSet<&'a str> = HashSet::new();
    for (sig, old_nodes) in &old_groups {
        let (&[old], Some(&[new])) = (
            old_nodes.as_slice(),
            new_groups.get(sig).map(Vec::as_slice),
        ) else {
            continue;
        };
        if old.path() != new.path() && removed.contains(old.path()) && added.contains(new.path())
        {
            moves.insert(old.path(), new);
            targets.insert(new.path());
        }
    }

    if moves.is_empty() {
        return changes;
    }

    changes
        .into_iter()
        .filter_map(|change| match change.kind() {
            ChangeKind::Removed => {
                let old = change.node();
                match moves.get(old.path()).copied() {
                    Some(new) => Some(Change::moved(old, new)),
                    None => Some(change),
                }
            }
            ChangeKind::Added if targets.contains(change.node().path()) => None,
            _ => Some(change),
        })
        .collect()
}
