//! Root-to-node path reconstruction.

use crate::error::SearchError;
use crate::node::{NodeId, SearchTree};

/// Node ids from the root to `node`, root first.
///
/// # Errors
///
/// Returns [`SearchError::UnknownNode`] if `node` (or an ancestor) is not in
/// `tree`.
pub fn reconstruct_path<S, L>(tree: &SearchTree<S, L>, node: NodeId) -> Result<Vec<NodeId>, SearchError> {
    let mut ids = Vec::new();
    let mut cursor = Some(node);
    while let Some(id) = cursor {
        let n = tree.node(id).ok_or(SearchError::UnknownNode { node: id })?;
        ids.push(id);
        cursor = n.parent;
    }
    ids.reverse();
    Ok(ids)
}

/// States and labels along a root-to-node path.
///
/// `operations()[i]` is the label that turns `states()[i]` into
/// `states()[i + 1]`; the final entry is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S, L> {
    nodes: Vec<NodeId>,
    states: Vec<S>,
    operations: Vec<Option<L>>,
}

impl<S, L> Path<S, L> {
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    #[must_use]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    #[must_use]
    pub fn operations(&self) -> &[Option<L>] {
        &self.operations
    }

    /// The labels of the edges, root first.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.operations.iter().flatten()
    }

    /// `(state, outgoing label)` pairs, root first.
    pub fn steps(&self) -> impl Iterator<Item = (&S, Option<&L>)> {
        self.states.iter().zip(self.operations.iter().map(Option::as_ref))
    }

    /// Number of edges (states minus one).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    #[must_use]
    pub fn first(&self) -> Option<&S> {
        self.states.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&S> {
        self.states.last()
    }
}

/// Walk parent links from `node` back to the root and return the path in
/// root-to-node order.
///
/// # Errors
///
/// Returns [`SearchError::UnknownNode`] if `node` is not in `tree`.
pub fn reconstruct<S: Clone, L: Clone>(
    tree: &SearchTree<S, L>,
    node: NodeId,
) -> Result<Path<S, L>, SearchError> {
    let nodes = reconstruct_path(tree, node)?;
    let states = nodes.iter().map(|&id| tree[id].state.clone()).collect();
    // Each non-root node carries the label that produced it; shift by one so
    // each state is paired with the label leaving it.
    let operations = nodes
        .iter()
        .skip(1)
        .map(|&id| tree[id].operation.clone())
        .chain(std::iter::once(None))
        .collect();
    Ok(Path {
        nodes,
        states,
        operations,
    })
}
