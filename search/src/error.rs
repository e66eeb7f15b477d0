//! Typed search errors.
//!
//! Running out of frontier or budget is not an error: a run always returns
//! its tree and a [`crate::graph::TerminationReason`]. `SearchError` covers
//! pre-flight policy failures and the questions asked of a finished run.

use crate::node::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `extract` was called on an empty frontier.
    EmptyFrontier,
    /// The run ended without reaching the goal.
    NoSolutionFound { expansions: u64 },
    /// The policy is unusable as configured.
    InvalidPolicy { detail: String },
    /// A node id that does not belong to the tree.
    UnknownNode { node: NodeId },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFrontier => write!(f, "extract from an empty frontier"),
            Self::NoSolutionFound { expansions } => {
                write!(f, "no solution found after {expansions} expansions")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::UnknownNode { node } => write!(f, "node {node} is not in the search tree"),
        }
    }
}

impl std::error::Error for SearchError {}
