//! Search tree: arena-allocated nodes with index back-references.
//!
//! Each node is owned by the [`SearchTree`] arena. A node's `parent` is a
//! plain [`NodeId`], used only for walking back to the root; ownership
//! never flows through it, so the tree cannot form reference cycles.

use serde::{Deserialize, Serialize};

/// Index of a node in its [`SearchTree`].
///
/// Ids are assigned in creation order; the root is always id `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// The root id.
    pub const ROOT: Self = Self(0);

    /// Position in creation order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// One node of the search tree.
#[derive(Debug, Clone)]
pub struct Node<S, L> {
    /// This node's id.
    pub id: NodeId,
    /// Parent id (`None` iff root).
    pub parent: Option<NodeId>,
    /// Full immutable state at this node.
    pub state: S,
    /// The label of the transition that produced this node from its parent.
    pub operation: Option<L>,
    /// Ancestor-chain length (root = 0).
    pub depth: u32,
    children: Option<Vec<NodeId>>,
}

impl<S, L> Node<S, L> {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether an expansion has been recorded for this node.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    /// Children in creation order (empty if never expanded).
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// Arena holding every node created during one search run.
#[derive(Debug, Clone)]
pub struct SearchTree<S, L> {
    nodes: Vec<Node<S, L>>,
}

impl<S, L> SearchTree<S, L> {
    /// A tree holding only the root.
    #[must_use]
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![Node {
                id: NodeId::ROOT,
                parent: None,
                state: root_state,
                operation: None,
                depth: 0,
                children: None,
            }],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes ever created (root included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<S, L>> {
        self.nodes.get(id.0)
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Node<S, L>> {
        self.nodes.iter()
    }

    /// Create a child of `parent`.
    ///
    /// The child is not attached to `parent`'s children list; that happens
    /// once per expansion through [`SearchTree::attach_children`].
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    pub fn push_child(&mut self, parent: NodeId, state: S, operation: L) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            parent: Some(parent),
            state,
            operation: Some(operation),
            depth,
            children: None,
        });
        id
    }

    /// Record the outcome of expanding `parent`. The first call wins;
    /// later calls leave the recorded children untouched.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    pub fn attach_children(&mut self, parent: NodeId, children: Vec<NodeId>) {
        let slot = &mut self.nodes[parent.0].children;
        debug_assert!(slot.is_none(), "node {parent} expanded twice");
        if slot.is_none() {
            *slot = Some(children);
        }
    }

    /// Number of nodes that were expanded.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_expanded()).count()
    }
}

impl<S, L> std::ops::Index<NodeId> for SearchTree<S, L> {
    type Output = Node<S, L>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
