//! Node statistics computed by traversal.

use super::document::Document;
use super::kind::NodeKind;
use super::node::Node;
use serde::Serialize;
use std::fmt;

/// Node counts for one tree (or several trees combined).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub control_nodes: usize,
    pub action_nodes: usize,
    pub condition_nodes: usize,
    pub decorator_nodes: usize,
    pub subtree_nodes: usize,
    pub max_depth: usize,
}

impl TreeStats {
    /// Count the nodes of the tree rooted at `root`.
    pub fn of(root: &Node) -> Self {
        let mut stats = Self::default();
        for node in root.iter() {
            stats.total_nodes += 1;
            stats.max_depth = stats.max_depth.max(node.depth());
            match node.kind() {
                NodeKind::Control => stats.control_nodes += 1,
                NodeKind::Action => stats.action_nodes += 1,
                NodeKind::Condition => stats.condition_nodes += 1,
                NodeKind::Decorator => stats.decorator_nodes += 1,
                NodeKind::Subtree => stats.subtree_nodes += 1,
            }
        }
        stats
    }

    fn merge(self, other: Self) -> Self {
        Self {
            total_nodes: self.total_nodes + other.total_nodes,
            control_nodes: self.control_nodes + other.control_nodes,
            action_nodes: self.action_nodes + other.action_nodes,
            condition_nodes: self.condition_nodes + other.condition_nodes,
            decorator_nodes: self.decorator_nodes + other.decorator_nodes,
            subtree_nodes: self.subtree_nodes + other.subtree_nodes,
            max_depth: self.max_depth.max(other.max_depth),
        }
    }
}

/// Statistics for a whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub total_trees: usize,
    #[serde(flatten)]
    pub nodes: TreeStats,
}

impl DocumentStats {
    /// Aggregate statistics over every tree in `document`.
    pub fn of(document: &Document) -> Self {
        let nodes = document
            .trees()
            .map(|(_, root)| TreeStats::of(root))
            .fold(TreeStats::default(), TreeStats::merge);
        Self {
            total_trees: document.len(),
            nodes,
        }
    }
}

impl fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trees:           {}", self.total_trees)?;
        writeln!(f, "Nodes:           {}", self.nodes.total_nodes)?;
        writeln!(f, "  Control:       {}", self.nodes.control_nodes)?;
        writeln!(f, "  Action:        {}", self.nodes.action_nodes)?;
        writeln!(f, "  Condition:     {}", self.nodes.condition_nodes)?;
        writeln!(f, "  Decorator:     {}", self.nodes.decorator_nodes)?;
        writeln!(f, "  SubTree:       {}", self.nodes.subtree_nodes)?;
        write!(f, "Max depth:       {}", self.nodes.max_depth)
    }
}
