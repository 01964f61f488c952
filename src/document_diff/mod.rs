//! Whole-document comparison.
//!
//! Runs the diff engine over every tree two documents share, lists trees
//! that only exist on one side, and reports changes to `SubTree` references.

#[cfg(test)]
mod tests;

use crate::compare::{
    AttributeDeltas, Change, ChangeKind, CompareOptions, attribute_deltas, compare_with,
};
use crate::error::Result;
use crate::tree::{Document, ID_ATTRIBUTE, Node, NodeKind};
use indexmap::IndexMap;

/// Changes within one tree defined in both documents.
#[derive(Debug, Clone)]
pub struct TreeDiff<'a> {
    pub name: String,
    pub changes: Vec<Change<'a>>,
}

impl TreeDiff<'_> {
    /// Whether anything other than `Unchanged` was found.
    pub fn has_changes(&self) -> bool {
        self.changes.iter().any(Change::is_change)
    }
}

/// A `SubTree` reference that appeared, disappeared, or changed attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtreeRefChange {
    /// `Added`, `Removed` or `Modified`.
    pub kind: ChangeKind,
    /// The referenced tree's ID.
    pub id: String,
    /// Attribute differences for `Modified`.
    pub attribute_deltas: AttributeDeltas,
}

/// Result of [`compare_documents`].
#[derive(Debug, Clone)]
pub struct DocumentDiff<'a> {
    /// Shared trees, in the old document's order.
    pub trees: Vec<TreeDiff<'a>>,
    /// Tree names defined only in the new document.
    pub added_trees: Vec<String>,
    /// Tree names defined only in the old document.
    pub removed_trees: Vec<String>,
    pub subtree_refs: Vec<SubtreeRefChange>,
}

impl DocumentDiff<'_> {
    /// Whether the documents differ in any way.
    pub fn has_changes(&self) -> bool {
        !self.added_trees.is_empty()
            || !self.removed_trees.is_empty()
            || !self.subtree_refs.is_empty()
            || self.trees.iter().any(TreeDiff::has_changes)
    }
}

/// Compare every tree of `old` against the same-named tree of `new`.
pub fn compare_documents<'a>(
    old: &'a Document,
    new: &'a Document,
    options: &CompareOptions,
) -> Result<DocumentDiff<'a>> {
    let mut trees = Vec::new();
    let mut removed_trees = Vec::new();
    for (name, old_root) in old.trees() {
        match new.get(name) {
            Some(new_root) => trees.push(TreeDiff {
                name: name.to_string(),
                changes: compare_with(old_root, new_root, options)?,
            }),
            None => removed_trees.push(name.to_string()),
        }
    }

    let added_trees: Vec<String> = new
        .names()
        .filter(|name| !old.contains(name))
        .map(str::to_string)
        .collect();

    let diff = DocumentDiff {
        trees,
        added_trees,
        removed_trees,
        subtree_refs: subtree_reference_changes(old, new, options),
    };

    tracing::info!(
        shared = diff.trees.len(),
        changed = diff.trees.iter().filter(|t| t.has_changes()).count(),
        added = diff.added_trees.len(),
        removed = diff.removed_trees.len(),
        "compared documents"
    );
    Ok(diff)
}

/// First `SubTree` node per referenced ID, in document pre-order.
fn subtree_references(doc: &Document) -> IndexMap<&str, &Node> {
    let mut refs = IndexMap::new();
    for (_, root) in doc.trees() {
        for node in root.iter().filter(|n| n.kind() == NodeKind::Subtree) {
            if let Some(id) = node.attribute(ID_ATTRIBUTE).filter(|id| !id.is_empty()) {
                refs.entry(id).or_insert(node);
            }
        }
    }
    refs
}

/// Compare the sets of `SubTree` references of two documents.
///
/// Removed and modified references come first in old document order,
/// followed by added references in new document order.
pub fn subtree_reference_changes(
    old: &Document,
    new: &Document,
    options: &CompareOptions,
) -> Vec<SubtreeRefChange> {
    let old_refs = subtree_references(old);
    let new_refs = subtree_references(new);

    let mut changes = Vec::new();
    for (id, old_node) in &old_refs {
        match new_refs.get(id) {
            None => changes.push(SubtreeRefChange {
                kind: ChangeKind::Removed,
                id: id.to_string(),
                attribute_deltas: AttributeDeltas::new(),
            }),
            Some(new_node) => {
                let deltas = attribute_deltas(old_node, new_node, options);
                if !deltas.is_empty() {
                    changes.push(SubtreeRefChange {
                        kind: ChangeKind::Modified,
                        id: id.to_string(),
                        attribute_deltas: deltas,
                    });
                }
            }
        }
    }
    for id in new_refs.keys().filter(|id| !old_refs.contains_key(*id)) {
        changes.push(SubtreeRefChange {
            kind: ChangeKind::Added,
            id: id.to_string(),
            attribute_deltas: AttributeDeltas::new(),
        });
    }
    changes
}
