//! Declarative assembly of child lists.
//!
//! [`NodeBuilder`] collects nodes into one ordered, flat sequence. Conditionals,
//! optional values, loops and nested groups all append in the order they are
//! declared; nothing is ever reordered.

use crate::node::Node;

/// Ordered accumulator of child nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeBuilder {
    nodes: Vec<Node>,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single node.
    #[must_use]
    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Appends the node produced by `f` only when `condition` holds.
    #[must_use]
    pub fn node_if(self, condition: bool, f: impl FnOnce() -> Node) -> Self {
        if condition {
            self.node(f())
        } else {
            self
        }
    }

    /// Appends `first()` when `condition` holds and `second()` otherwise.
    #[must_use]
    pub fn either(
        self,
        condition: bool,
        first: impl FnOnce() -> Node,
        second: impl FnOnce() -> Node,
    ) -> Self {
        if condition {
            self.node(first())
        } else {
            self.node(second())
        }
    }

    #[must_use]
    pub fn optional(self, node: Option<Node>) -> Self {
        match node {
            Some(node) => self.node(node),
            None => self,
        }
    }

    /// Appends every node of `nodes`, in iteration order.
    #[must_use]
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Flattens another builder's nodes into this one.
    #[must_use]
    pub fn group(self, other: Self) -> Self {
        self.nodes(other.nodes)
    }

    /// Appends in place, for use inside ordinary loops.
    pub fn push(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn build(self) -> Vec<Node> {
        self.nodes
    }
}

impl Extend<Node> for NodeBuilder {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl FromIterator<Node> for NodeBuilder {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl From<NodeBuilder> for Vec<Node> {
    fn from(builder: NodeBuilder) -> Self {
        builder.build()
    }
}
