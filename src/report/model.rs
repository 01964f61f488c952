//! Serializable report model.
//!
//! A [`Report`] is a rendering-neutral copy of diff results: it owns its
//! strings, so it outlives the trees it was built from and can be printed as
//! text or serialized as JSON.

use super::summary::Summary;
use crate::compare::{AttributeDelta, AttributeDeltas, Change, ChangeKind, SIGNATURE_ATTRIBUTES};
use crate::document_diff::{DocumentDiff, SubtreeRefChange, TreeDiff};
use crate::tree::{Node, NodeKind};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Where the two compared documents came from (usually file paths).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sources {
    pub old: String,
    pub new: String,
}

/// One change, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
    pub tag: String,
    pub node_kind: NodeKind,
    /// Identifying attributes of the node (`ID`, `name`, `sub_tree_name`).
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub identity: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_delta: Option<AttributeDelta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind_delta: Option<AttributeDelta>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attribute_deltas: AttributeDeltas,
}

impl ChangeRecord {
    pub fn from_change(change: &Change<'_>) -> Self {
        let node = change.node();
        Self {
            kind: change.kind(),
            old_path: change.old_path().map(str::to_string),
            new_path: change.new_path().map(str::to_string),
            tag: node.tag().to_string(),
            node_kind: node.kind(),
            identity: identity(node),
            tag_delta: change.tag_delta().map(|(old, new)| AttributeDelta::new(old, new)),
            kind_delta: change
                .kind_delta()
                .map(|(old, new)| AttributeDelta::new(old.as_str(), new.as_str())),
            attribute_deltas: change.attribute_deltas().clone(),
        }
    }
}

fn identity(node: &Node) -> IndexMap<String, String> {
    SIGNATURE_ATTRIBUTES
        .iter()
        .filter_map(|name| {
            node.attribute(name)
                .map(|value| (name.to_string(), value.to_string()))
        })
        .collect()
}

/// Results for one tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeReport {
    pub name: String,
    pub summary: Summary,
    /// Change entries; `Unchanged` entries are only kept on request.
    pub changes: Vec<ChangeRecord>,
}

impl TreeReport {
    pub fn from_tree_diff(diff: &TreeDiff<'_>, show_unchanged: bool) -> Self {
        Self {
            name: diff.name.clone(),
            summary: Summary::of(&diff.changes),
            changes: diff
                .changes
                .iter()
                .filter(|c| show_unchanged || c.is_change())
                .map(ChangeRecord::from_change)
                .collect(),
        }
    }
}

/// A `SubTree` reference change, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtreeRefRecord {
    pub kind: ChangeKind,
    pub id: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attribute_deltas: AttributeDeltas,
}

impl From<&SubtreeRefChange> for SubtreeRefRecord {
    fn from(change: &SubtreeRefChange) -> Self {
        Self {
            kind: change.kind,
            id: change.id.clone(),
            attribute_deltas: change.attribute_deltas.clone(),
        }
    }
}

/// Complete output of one `compare` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub sources: Sources,
    pub generated_at: DateTime<Utc>,
    pub trees: Vec<TreeReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_trees: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_trees: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtree_refs: Vec<SubtreeRefRecord>,
}

impl Report {
    /// Report on a single selected tree.
    pub fn for_tree(sources: Sources, diff: &TreeDiff<'_>, show_unchanged: bool) -> Self {
        Self {
            sources,
            generated_at: Utc::now(),
            trees: vec![TreeReport::from_tree_diff(diff, show_unchanged)],
            added_trees: Vec::new(),
            removed_trees: Vec::new(),
            subtree_refs: Vec::new(),
        }
    }

    /// Report on every tree of two documents.
    pub fn for_document(sources: Sources, diff: &DocumentDiff<'_>, show_unchanged: bool) -> Self {
        Self {
            sources,
            generated_at: Utc::now(),
            trees: diff
                .trees
                .iter()
                .map(|tree| TreeReport::from_tree_diff(tree, show_unchanged))
                .collect(),
            added_trees: diff.added_trees.clone(),
            removed_trees: diff.removed_trees.clone(),
            subtree_refs: diff.subtree_refs.iter().map(SubtreeRefRecord::from).collect(),
        }
    }

    /// Whether any tree, tree list, or reference differs.
    pub fn has_changes(&self) -> bool {
        !self.added_trees.is_empty()
            || !self.removed_trees.is_empty()
            || !self.subtree_refs.is_empty()
            || self.trees.iter().any(|t| t.summary.changed() > 0)
    }
}
