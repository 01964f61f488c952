//! Choosing which tree of two documents to compare.
//!
//! A document usually defines several trees, and a change set typically
//! touches only one of them. Selection is a declared, data-driven rule:
//!
//! 1. An explicitly requested tree name wins (and must exist on both sides).
//! 2. Otherwise every tree defined in both documents is scored by how many of
//!    the hint identifiers appear in it as an `ID` or `name` attribute value.
//! 3. The highest score wins. Ties go to the preferred default tree name if it
//!    is among them, else to the lexicographically smallest name.


use crate::error::{BtDiffError, Result};
use crate::tree::{DEFAULT_TREE_NAME, Document, Node};
use std::collections::BTreeSet;

/// Attributes whose values are matched against hint identifiers.
const HINT_ATTRIBUTES: &[&str] = &["ID", "name"];

/// Inputs to [`select_tree`].
#[derive(Debug, Clone)]
pub struct SelectionRule {
    /// Tree requested by name; bypasses scoring.
    pub explicit: Option<String>,
    /// Node identifiers known to be involved in the change.
    pub hints: BTreeSet<String>,
    /// Tree preferred when scores tie.
    pub default_tree: String,
}

impl Default for SelectionRule {
    fn default() -> Self {
        Self {
            explicit: None,
            hints: BTreeSet::new(),
            default_tree: DEFAULT_TREE_NAME.to_string(),
        }
    }
}

/// Outcome of [`select_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Name of the chosen tree (present in both documents).
    pub name: String,
    /// Number of hint identifiers found in the chosen tree.
    pub score: usize,
}

/// Pick the tree to compare between `old` and `new`.
pub fn select_tree(old: &Document, new: &Document, rule: &SelectionRule) -> Result<Selection> {
    if let Some(name) = &rule.explicit {
        let tree = require_tree(new, name, "new")?;
        require_tree(old, name, "old")?;
        return Ok(Selection {
            name: name.clone(),
            score: hint_score(tree, &rule.hints),
        });
    }

    let mut best: Option<Selection> = None;
    for (name, new_root) in new.trees() {
        if !old.contains(name) {
            continue;
        }
        let candidate = Selection {
            name: name.to_string(),
            score: hint_score(new_root, &rule.hints),
        };
        tracing::debug!(tree = %candidate.name, score = candidate.score, "scored tree");

        best = match best {
            Some(current) if !beats(&candidate, &current, &rule.default_tree) => Some(current),
            _ => Some(candidate),
        };
    }

    let selection = best.ok_or_else(|| {
        BtDiffError::UserError("the two documents share no behavior tree".to_string())
    })?;
    tracing::info!(tree = %selection.name, score = selection.score, "selected tree");
    Ok(selection)
}

fn require_tree<'a>(doc: &'a Document, name: &str, side: &'static str) -> Result<&'a Node> {
    doc.get(name).ok_or_else(|| BtDiffError::TreeNotFound {
        name: name.to_string(),
        side,
    })
}

/// Whether `candidate` should replace `current` as the selection.
fn beats(candidate: &Selection, current: &Selection, default_tree: &str) -> bool {
    if candidate.score != current.score {
        return candidate.score > current.score;
    }
    if current.name == default_tree {
        return false;
    }
    candidate.name == default_tree || candidate.name < current.name
}

/// Count the distinct hints that appear anywhere in the tree.
pub fn hint_score(root: &Node, hints: &BTreeSet<String>) -> usize {
    if hints.is_empty() {
        return 0;
    }
    let found: BTreeSet<&str> = root
        .iter()
        .flat_map(|node| HINT_ATTRIBUTES.iter().filter_map(move |attr| node.attribute(attr)))
        .filter(|value| hints.contains(*value))
        .collect();
    found.len()
}
