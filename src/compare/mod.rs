//! Structural diff engine.
//!
//! Given the roots of an old and a new tree, [`compare`] classifies every
//! node by path:
//!
//! - present in both trees: `Modified` (tag, kind or attributes differ) or
//!   `Unchanged`
//! - present only in the old tree: `Removed`
//! - present only in the new tree: `Added`
//!
//! A final pass pairs `Removed`/`Added` entries that carry the same unique
//! [`signature`] into a single `Moved` change.
//!
//! The engine is pure: it never mutates its inputs, performs no I/O and can be
//! called concurrently on unrelated tree pairs.

mod change;
mod index;
mod options;
mod signature;


pub use change::{AttributeDelta, AttributeDeltas, Change, ChangeKind};
pub use options::CompareOptions;
pub use signature::{SIGNATURE_ATTRIBUTES, signature};

use crate::tree::Node;
use index::PathIndex;
use std::fmt;
use thiserror::Error;

/// Which of the two input trees a problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// Precondition violations detected before diffing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// Two nodes of the same tree share one path.
    #[error("duplicate path '{path}' in {side} tree")]
    DuplicatePath { side: Side, path: String },
}

/// Compare two trees and return one change per node position.
///
/// Changes are ordered by the old tree's pre-order, followed by nodes that
/// only exist in the new tree in its pre-order.
pub fn compare<'a>(old: &'a Node, new: &'a Node) -> Result<Vec<Change<'a>>, CompareError> {
    compare_with(old, new, &CompareOptions::default())
}

/// [`compare`] with explicit options.
pub fn compare_with<'a>(
    old: &'a Node,
    new: &'a Node,
    options: &CompareOptions,
) -> Result<Vec<Change<'a>>, CompareError> {
    let old_index = PathIndex::build(old, Side::Old)?;
    let new_index = PathIndex::build(new, Side::New)?;

    let mut changes = Vec::with_capacity(old_index.len().max(new_index.len()));
    for old_node in old_index.nodes() {
        match new_index.get(old_node.path()) {
            Some(new_node) => changes.push(compare_content(old_node, new_node, options)),
            None => changes.push(Change::removed(old_node)),
        }
    }
    for new_node in new_index.nodes() {
        if !old_index.contains(new_node.path()) {
            changes.push(Change::added(new_node));
        }
    }

    let changes = signature::resolve_moves(changes, &old_index, &new_index);

    tracing::debug!(
        old_nodes = old_index.len(),
        new_nodes = new_index.len(),
        changed = changes.iter().filter(|c| c.is_change()).count(),
        "compared trees"
    );

    Ok(changes)
}

/// Compare two nodes that occupy the same path.
fn compare_content<'a>(old: &'a Node, new: &'a Node, options: &CompareOptions) -> Change<'a> {
    let tag_delta = (old.tag() != new.tag()).then(|| (old.tag(), new.tag()));
    let kind_delta = (old.kind() != new.kind()).then(|| (old.kind(), new.kind()));
    let attribute_deltas = attribute_deltas(old, new, options);

    if tag_delta.is_none() && kind_delta.is_none() && attribute_deltas.is_empty() {
        Change::unchanged(old, new)
    } else {
        Change::modified(old, new, tag_delta, kind_delta, attribute_deltas)
    }
}

/// Differing attributes over the union of both nodes' attribute names,
/// old attribute order first.
pub fn attribute_deltas(old: &Node, new: &Node, options: &CompareOptions) -> AttributeDeltas {
    let names = old.attributes().keys().chain(
        new.attributes()
            .keys()
            .filter(|name| !old.attributes().contains_key(name.as_str())),
    );

    let mut deltas = AttributeDeltas::new();
    for name in names {
        if options.is_ignored(name) {
            continue;
        }
        let old_value = old.attribute(name).unwrap_or("");
        let new_value = new.attribute(name).unwrap_or("");
        if old_value != new_value {
            deltas.insert(name.clone(), AttributeDelta::new(old_value, new_value));
        }
    }
    deltas
}
