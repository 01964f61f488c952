//! Change records produced by the diff engine.

use crate::tree::{Node, NodeKind};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Classification of one diff result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
    Unchanged,
    Moved,
}

impl ChangeKind {
    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Modified => "modified",
            ChangeKind::Unchanged => "unchanged",
            ChangeKind::Moved => "moved",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Before/after values of one attribute.
///
/// An attribute missing on one side is represented by an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDelta {
    pub old: String,
    pub new: String,
}

impl AttributeDelta {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// Attribute deltas keyed by attribute name.
pub type AttributeDeltas = IndexMap<String, AttributeDelta>;

/// One node-level diff result.
///
/// Changes borrow the nodes they describe from the two input trees and are
/// never mutated after the engine returns them.
#[derive(Debug, Clone, PartialEq)]
pub struct Change<'a> {
    kind: ChangeKind,
    subject: &'a Node,
    old_node: Option<&'a Node>,
    new_node: Option<&'a Node>,
    tag_delta: Option<(&'a str, &'a str)>,
    kind_delta: Option<(NodeKind, NodeKind)>,
    attribute_deltas: AttributeDeltas,
}

impl<'a> Change<'a> {
    pub(crate) fn added(new: &'a Node) -> Self {
        Self::new(ChangeKind::Added, new, None, Some(new))
    }

    pub(crate) fn removed(old: &'a Node) -> Self {
        Self::new(ChangeKind::Removed, old, Some(old), None)
    }

    pub(crate) fn unchanged(old: &'a Node, new: &'a Node) -> Self {
        Self::new(ChangeKind::Unchanged, new, Some(old), Some(new))
    }

    pub(crate) fn moved(old: &'a Node, new: &'a Node) -> Self {
        Self::new(ChangeKind::Moved, new, Some(old), Some(new))
    }

    pub(crate) fn modified(
        old: &'a Node,
        new: &'a Node,
        tag_delta: Option<(&'a str, &'a str)>,
        kind_delta: Option<(NodeKind, NodeKind)>,
        attribute_deltas: AttributeDeltas,
    ) -> Self {
        Self {
            tag_delta,
            kind_delta,
            attribute_deltas,
            ..Self::new(ChangeKind::Modified, new, Some(old), Some(new))
        }
    }

    fn new(
        kind: ChangeKind,
        subject: &'a Node,
        old_node: Option<&'a Node>,
        new_node: Option<&'a Node>,
    ) -> Self {
        Self {
            kind,
            subject,
            old_node,
            new_node,
            tag_delta: None,
            kind_delta: None,
            attribute_deltas: AttributeDeltas::new(),
        }
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Node in the old tree (absent for `Added`).
    pub fn old_node(&self) -> Option<&'a Node> {
        self.old_node
    }

    /// Node in the new tree (absent for `Removed`).
    pub fn new_node(&self) -> Option<&'a Node> {
        self.new_node
    }

    pub fn old_path(&self) -> Option<&'a str> {
        self.old_node.map(Node::path)
    }

    pub fn new_path(&self) -> Option<&'a str> {
        self.new_node.map(Node::path)
    }

    /// The node this change is best described by: the new node when there is
    /// one, else the old node.
    pub fn node(&self) -> &'a Node {
        self.subject
    }

    /// `(old, new)` tag when a modified node's tag differs.
    pub fn tag_delta(&self) -> Option<(&'a str, &'a str)> {
        self.tag_delta
    }

    /// `(old, new)` kind when a modified node's kind differs.
    pub fn kind_delta(&self) -> Option<(NodeKind, NodeKind)> {
        self.kind_delta
    }

    /// Attributes whose values differ (only populated for `Modified`).
    pub fn attribute_deltas(&self) -> &AttributeDeltas {
        &self.attribute_deltas
    }

    /// Whether this change reports any difference at all.
    pub fn is_change(&self) -> bool {
        self.kind != ChangeKind::Unchanged
    }
}
