//! State generator contract.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use crate::graph::{CandidateOutcome, ExpandEvent};
use crate::node::{NodeId, SearchTree};
use crate::policy::DedupScope;

/// A problem the search engine can explore.
///
/// # Contract
///
/// - `successors` must be deterministic: the same state yields the same
///   `(label, state)` pairs in the same order.
/// - State equality must be full structural equality; the engine uses it
///   for goal detection and for the visited/open sets.
pub trait StateGenerator {
    type State: Clone + Eq + Hash + Debug;
    type Label: Clone + Debug;

    /// Every legal one-step successor of `state`, in enumeration order.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Label, Self::State)>;

    /// Expand `node`: create a child for every successor that survives the
    /// `scope` filter and attach the children to `node`.
    ///
    /// Children keep enumeration order. The returned event records one
    /// outcome per candidate; its `order` is left at zero for the caller.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in `tree`.
    fn expand(
        &self,
        tree: &mut SearchTree<Self::State, Self::Label>,
        node: NodeId,
        visited: &HashSet<Self::State>,
        open: &HashSet<Self::State>,
        scope: DedupScope,
    ) -> ExpandEvent {
        let candidates = self.successors(&tree[node].state);
        let mut outcomes = Vec::with_capacity(candidates.len());
        let mut children = Vec::with_capacity(candidates.len());

        for (label, state) in candidates {
            let outcome = if scope.checks_visited() && visited.contains(&state) {
                trace!(parent = %node, label = ?label, "candidate already visited");
                CandidateOutcome::SuppressedVisited
            } else if scope.checks_open() && open.contains(&state) {
                trace!(parent = %node, label = ?label, "candidate already pending");
                CandidateOutcome::SuppressedOpen
            } else {
                let child = tree.push_child(node, state, label);
                children.push(child);
                CandidateOutcome::Created { node: child }
            };
            outcomes.push(outcome);
        }

        let depth = tree[node].depth;
        tree.attach_children(node, children);
        ExpandEvent {
            order: 0,
            node,
            depth,
            candidates: outcomes,
        }
    }
}
