//! Run outcome and expansion-event audit log.
//!
//! Every expansion appends one [`ExpandEvent`] recording, per candidate in
//! enumeration order, whether it became a node or was suppressed.

use serde::Serialize;

use crate::node::NodeId;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerminationReason {
    /// A goal node was extracted (first-solution mode).
    GoalReached { node: NodeId },
    /// Nothing left to extract (or, for recursive search, to descend into).
    Exhausted,
    /// `max_expansions` was hit.
    ExpansionBudgetExceeded { limit: u64 },
}

/// What happened to one candidate successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CandidateOutcome {
    /// Added to the tree as `node`.
    Created { node: NodeId },
    /// State already visited.
    SuppressedVisited,
    /// State already pending in the frontier.
    SuppressedOpen,
}

/// One extraction that led to an expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandEvent {
    /// Position among all expansions of the run.
    pub order: u64,
    pub node: NodeId,
    pub depth: u32,
    /// Outcomes in candidate enumeration order.
    pub candidates: Vec<CandidateOutcome>,
}

impl ExpandEvent {
    /// Nodes created by this expansion.
    pub fn created(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.candidates.iter().filter_map(|c| match c {
            CandidateOutcome::Created { node } => Some(*node),
            _ => None,
        })
    }
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub extractions: u64,
    pub expansions: u64,
    /// Nodes created, root included.
    pub nodes_generated: u64,
    pub suppressed_visited: u64,
    pub suppressed_open: u64,
    /// Extracted nodes skipped because their state was already visited.
    pub revisits_skipped: u64,
    /// Extracted nodes not expanded because of `max_depth`.
    pub depth_pruned: u64,
    pub frontier_high_water: u64,
    pub solutions: u64,
}

impl SearchStats {
    pub(crate) fn record(&mut self, event: &ExpandEvent) {
        self.expansions += 1;
        for outcome in &event.candidates {
            match outcome {
                CandidateOutcome::Created { .. } => self.nodes_generated += 1,
                CandidateOutcome::SuppressedVisited => self.suppressed_visited += 1,
                CandidateOutcome::SuppressedOpen => self.suppressed_open += 1,
            }
        }
    }
}
