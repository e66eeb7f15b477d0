//! Frontier-driven search loop.
//!
//! One extraction step, in order:
//!
//! 1. extract a node from the frontier (and drop its state from `open`);
//! 2. if its state is the goal, record it (and stop in first-solution mode);
//! 3. if its state is already visited, skip it;
//! 4. mark it visited;
//! 5. if it is deeper than `max_depth`, skip it;
//! 6. expand it and add the surviving children to the frontier.
//!
//! In all-solutions mode goal nodes fall through to steps 3-6, so goals
//! that are also intermediate forms keep being explored.

use std::collections::HashSet;

use tracing::{debug, info, info_span, trace};

use crate::contract::StateGenerator;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::{CandidateOutcome, ExpandEvent, SearchStats, TerminationReason};
use crate::node::{NodeId, SearchTree};
use crate::path::{reconstruct, Path};
use crate::policy::SearchPolicy;

/// Everything a finished run produced.
///
/// A run that never reaches the goal is still a complete run; ask
/// [`SearchRun::first_solution`] to turn that into an error.
#[derive(Debug, Clone)]
pub struct SearchRun<S, L> {
    pub tree: SearchTree<S, L>,
    /// Goal nodes in the order they were extracted.
    pub solutions: Vec<NodeId>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    /// Expansion events in expansion order.
    pub events: Vec<ExpandEvent>,
}

impl<S: Clone, L: Clone> SearchRun<S, L> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`SearchError::NoSolutionFound`] if no goal was extracted.
    pub fn first_solution(&self) -> Result<NodeId, SearchError> {
        self.solutions
            .first()
            .copied()
            .ok_or(SearchError::NoSolutionFound {
                expansions: self.stats.expansions,
            })
    }

    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] if `node` is not in the tree.
    pub fn path(&self, node: NodeId) -> Result<Path<S, L>, SearchError> {
        reconstruct(&self.tree, node)
    }

    /// Paths to every recorded solution, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownNode`] if a solution id is not in the
    /// tree, which cannot happen for a run produced by this crate.
    pub fn solution_paths(&self) -> Result<Vec<Path<S, L>>, SearchError> {
        self.solutions.iter().map(|&id| self.path(id)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    First,
    All,
}

/// Iterative search over a [`StateGenerator`].
///
/// Holds no per-run state: the tree, frontier and visited/open sets are
/// created fresh by every call.
pub struct Searcher<'g, G> {
    generator: &'g G,
    policy: SearchPolicy,
}

impl<'g, G: StateGenerator> Searcher<'g, G> {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
    pub fn new(generator: &'g G, policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self { generator, policy })
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Stop at the first extracted goal.
    ///
    /// # Errors
    ///
    /// Only internal frontier failures; a missing goal is reported through
    /// the run's termination reason.
    pub fn find_first(
        &self,
        root: G::State,
        goal: &G::State,
    ) -> Result<SearchRun<G::State, G::Label>, SearchError> {
        self.run(root, goal, Mode::First)
    }

    /// Collect every extracted goal until the frontier is exhausted.
    ///
    /// # Errors
    ///
    /// Same as [`Searcher::find_first`].
    pub fn find_all(
        &self,
        root: G::State,
        goal: &G::State,
    ) -> Result<SearchRun<G::State, G::Label>, SearchError> {
        self.run(root, goal, Mode::All)
    }

    fn run(
        &self,
        root: G::State,
        goal: &G::State,
        mode: Mode,
    ) -> Result<SearchRun<G::State, G::Label>, SearchError> {
        let policy = self.policy;
        let span = info_span!(
            "search",
            mode = ?mode,
            discipline = ?policy.discipline,
            dedup = ?policy.dedup,
        );
        let _guard = span.enter();

        let tracks_open = policy.dedup.checks_open();
        let mut tree = SearchTree::new(root);
        let mut frontier = Frontier::new(policy.discipline);
        let mut visited: HashSet<G::State> = HashSet::new();
        let mut open: HashSet<G::State> = HashSet::new();
        let mut stats = SearchStats {
            nodes_generated: 1,
            ..SearchStats::default()
        };
        let mut events: Vec<ExpandEvent> = Vec::new();
        let mut solutions: Vec<NodeId> = Vec::new();

        let root_id = tree.root();
        if tracks_open {
            open.insert(tree[root_id].state.clone());
        }
        frontier.push(root_id);

        let termination = loop {
            if frontier.is_empty() {
                break TerminationReason::Exhausted;
            }
            if let Some(limit) = policy.max_expansions {
                if stats.expansions >= limit {
                    break TerminationReason::ExpansionBudgetExceeded { limit };
                }
            }

            let id = frontier.extract()?;
            stats.extractions += 1;
            let node = &tree[id];
            if tracks_open {
                open.remove(&node.state);
            }

            if node.state == *goal {
                solutions.push(id);
                debug!(node = %id, depth = node.depth, "goal extracted");
                if mode == Mode::First {
                    break TerminationReason::GoalReached { node: id };
                }
            }

            if visited.contains(&node.state) {
                stats.revisits_skipped += 1;
                trace!(node = %id, "already visited");
                continue;
            }
            visited.insert(node.state.clone());

            if policy.max_depth.is_some_and(|max| node.depth > max) {
                stats.depth_pruned += 1;
                trace!(node = %id, depth = node.depth, "beyond depth bound");
                continue;
            }

            let mut event = self
                .generator
                .expand(&mut tree, id, &visited, &open, policy.dedup);
            event.order = stats.expansions;
            stats.record(&event);
            debug!(
                node = %id,
                depth = event.depth,
                candidates = event.candidates.len(),
                created = event.created().count(),
                "expanded"
            );

            for outcome in &event.candidates {
                if let CandidateOutcome::Created { node: child } = *outcome {
                    if tracks_open {
                        open.insert(tree[child].state.clone());
                    }
                    frontier.push(child);
                }
            }
            events.push(event);
        };

        stats.frontier_high_water = frontier.high_water() as u64;
        stats.solutions = solutions.len() as u64;
        info!(
            termination = ?termination,
            expansions = stats.expansions,
            nodes = stats.nodes_generated,
            solutions = stats.solutions,
            "search finished"
        );

        Ok(SearchRun {
            tree,
            solutions,
            termination,
            stats,
            events,
        })
    }
}
