//! A parsed XML file: a set of named behavior trees.

use super::node::Node;
use indexmap::IndexMap;

/// Tree name used when a `BehaviorTree` element has no `ID`.
pub const DEFAULT_TREE_NAME: &str = "MainTree";

/// All behavior trees defined in one XML document, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    trees: IndexMap<String, Node>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tree, returning the previous tree with the same name.
    pub fn insert(&mut self, name: impl Into<String>, root: Node) -> Option<Node> {
        self.trees.insert(name.into(), root)
    }

    /// Look up a tree by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.trees.get(name)
    }

    /// Whether a tree with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.trees.contains_key(name)
    }

    /// Tree names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    /// `(name, root)` pairs in definition order.
    pub fn trees(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.trees.iter().map(|(name, root)| (name.as_str(), root))
    }

    /// Number of trees.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether the document defines no trees.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Pick the tree to show when none was requested: `preferred` if present,
    /// else the first definition.
    pub fn default_tree<'a>(&'a self, preferred: &str) -> Option<(&'a str, &'a Node)> {
        if let Some((name, root)) = self.trees.get_key_value(preferred) {
            return Some((name.as_str(), root));
        }
        self.trees().next()
    }
}
