//! Node model and path assignment.

use super::kind::NodeKind;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Attribute carrying a node's identity; it replaces the sibling index in paths.
pub const ID_ATTRIBUTE: &str = "ID";

/// A single node of a behavior tree.
///
/// Nodes are only created through [`NodeBuilder::build`], which assigns every
/// node its depth and canonical path. After construction a node is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    kind: NodeKind,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
    depth: usize,
    path: String,
}

impl Node {
    /// Element type name, e.g. `Sequence` or `SubTree`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Category derived from the tag.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Attributes in source order, values verbatim.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Look up one attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Children in execution order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Distance from the tree root (root = 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Canonical address of this node within its tree.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Pre-order traversal over this node and all descendants.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`Node::iter`].
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Mutable, unpositioned description of a node.
///
/// The parser (or a test) assembles builders and calls [`NodeBuilder::build`]
/// once on the root to obtain an immutable, path-addressed tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeBuilder {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<NodeBuilder>,
}

impl NodeBuilder {
    /// Start a node with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Add an attribute (chaining form).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child (chaining form).
    pub fn child(mut self, child: NodeBuilder) -> Self {
        self.children.push(child);
        self
    }

    /// Add or replace an attribute in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append a child in place.
    pub fn push_child(&mut self, child: NodeBuilder) {
        self.children.push(child);
    }

    /// Tag of the node being built.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute of the node being built.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Finish the tree rooted at this builder.
    ///
    /// The root's path is its tag. Every other node's path is
    /// `parent/tag[@ID='value']` when it has a non-empty `ID`, else
    /// `parent/tag[n]` where `n` counts earlier siblings with the same tag.
    pub fn build(self) -> Node {
        let path = self.tag.clone();
        self.build_at(path, 0)
    }

    fn build_at(self, path: String, depth: usize) -> Node {
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut children = Vec::with_capacity(self.children.len());

        for child in self.children {
            let index = seen.entry(child.tag.clone()).or_insert(0);
            let child_path = child_path(&path, &child, *index);
            *index += 1;
            children.push(child.build_at(child_path, depth + 1));
        }

        Node {
            kind: NodeKind::classify(&self.tag),
            tag: self.tag,
            attributes: self.attributes,
            children,
            depth,
            path,
        }
    }
}

fn child_path(parent: &str, child: &NodeBuilder, sibling_index: usize) -> String {
    match child.attribute(ID_ATTRIBUTE) {
        Some(id) if !id.is_empty() => format!("{}/{}[@ID='{}']", parent, child.tag, id),
        _ => format!("{}/{}[{}]", parent, child.tag, sibling_index),
    }
}
