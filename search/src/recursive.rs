//! Recursive depth-first search.
//!
//! Shares the visited-set discipline of [`crate::search::Searcher`] but
//! walks the tree with the call stack instead of a frontier: a node is
//! marked visited on entry, checked against the goal, expanded against
//! `visited` only, and each unvisited child is descended into in order.
//!
//! There is no depth bound. Very deep state spaces can exhaust the thread
//! stack; use [`crate::search::Searcher`] with a LIFO frontier for those.

use std::collections::HashSet;

use tracing::{debug, info, info_span};

use crate::contract::StateGenerator;
use crate::graph::{ExpandEvent, SearchStats, TerminationReason};
use crate::node::{NodeId, SearchTree};
use crate::policy::DedupScope;
use crate::search::SearchRun;

pub struct RecursiveSearcher<'g, G> {
    generator: &'g G,
}

struct Descent<S, L> {
    tree: SearchTree<S, L>,
    visited: HashSet<S>,
    open: HashSet<S>,
    stats: SearchStats,
    events: Vec<ExpandEvent>,
}

impl<'g, G: StateGenerator> RecursiveSearcher<'g, G> {
    #[must_use]
    pub fn new(generator: &'g G) -> Self {
        Self { generator }
    }

    /// Depth-first descent from `root`, stopping at the first goal.
    #[must_use]
    pub fn find_first(&self, root: G::State, goal: &G::State) -> SearchRun<G::State, G::Label> {
        let span = info_span!("recursive_search");
        let _guard = span.enter();

        let mut d = Descent {
            tree: SearchTree::new(root),
            visited: HashSet::new(),
            open: HashSet::new(),
            stats: SearchStats {
                nodes_generated: 1,
                ..SearchStats::default()
            },
            events: Vec::new(),
        };
        let root_id = d.tree.root();
        let found = self.descend(&mut d, root_id, goal);

        let termination = match found {
            Some(node) => TerminationReason::GoalReached { node },
            None => TerminationReason::Exhausted,
        };
        let solutions: Vec<NodeId> = found.into_iter().collect();
        d.stats.solutions = solutions.len() as u64;
        info!(
            termination = ?termination,
            expansions = d.stats.expansions,
            nodes = d.stats.nodes_generated,
            "recursive search finished"
        );

        SearchRun {
            tree: d.tree,
            solutions,
            termination,
            stats: d.stats,
            events: d.events,
        }
    }

    fn descend(
        &self,
        d: &mut Descent<G::State, G::Label>,
        node: NodeId,
        goal: &G::State,
    ) -> Option<NodeId> {
        d.stats.extractions += 1;
        d.visited.insert(d.tree[node].state.clone());
        if d.tree[node].state == *goal {
            debug!(node = %node, depth = d.tree[node].depth, "goal reached");
            return Some(node);
        }

        let mut event =
            self.generator
                .expand(&mut d.tree, node, &d.visited, &d.open, DedupScope::Visited);
        event.order = d.stats.expansions;
        d.stats.record(&event);
        let children: Vec<NodeId> = event.created().collect();
        d.events.push(event);

        for child in children {
            // A sibling's subtree may have reached this state already.
            if d.visited.contains(&d.tree[child].state) {
                d.stats.revisits_skipped += 1;
                continue;
            }
            if let Some(found) = self.descend(d, child, goal) {
                return Some(found);
            }
        }
        None
    }
}
