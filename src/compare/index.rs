//! Path -> node index over one tree.

use super::{CompareError, Side};
use crate::tree::Node;
use indexmap::IndexMap;

/// All nodes of one tree keyed by path, in pre-order.
pub(crate) struct PathIndex<'a> {
    nodes: IndexMap<&'a str, &'a Node>,
}

impl<'a> PathIndex<'a> {
    /// Index every node under `root`.
    ///
    /// Fails on the first path that occurs twice.
    pub(crate) fn build(root: &'a Node, side: Side) -> Result<Self, CompareError> {
        let mut nodes = IndexMap::new();
        for node in root.iter() {
            if nodes.insert(node.path(), node).is_some() {
                return Err(CompareError::DuplicatePath {
                    side,
                    path: node.path().to_string(),
                });
            }
        }
        Ok(Self { nodes })
    }

    pub(crate) fn get(&self, path: &str) -> Option<&'a Node> {
        self.nodes.get(path).copied()
    }

    pub(crate) fn contains(&self, path: &str) -> bool {
        self.nodes.contains_key(path)
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.nodes.values().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
