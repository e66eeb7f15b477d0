//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::frontier::FrontierDiscipline;

/// Depth bound used by ambiguity enumeration when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 25;

/// Which states a candidate successor is checked against before it is
/// added to the tree.
///
/// Independently of the scope, an extracted node whose state is already
/// visited is never expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupScope {
    /// Keep every candidate. Needed to collect every path to a goal.
    ExtractionOnly,
    /// Drop candidates whose state has already been expanded.
    Visited,
    /// Drop candidates whose state is expanded or already pending.
    VisitedAndOpen,
}

impl DedupScope {
    #[must_use]
    pub fn checks_visited(self) -> bool {
        matches!(self, Self::Visited | Self::VisitedAndOpen)
    }

    #[must_use]
    pub fn checks_open(self) -> bool {
        matches!(self, Self::VisitedAndOpen)
    }
}

/// Frontier discipline, dedup scope and budgets for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPolicy {
    pub discipline: FrontierDiscipline,
    pub dedup: DedupScope,
    /// Nodes deeper than this are not expanded.
    #[serde(default)]
    pub max_depth: Option<u32>,
    /// Stop after this many expansions.
    #[serde(default)]
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Breadth-first, full dedup, unbounded.
    #[must_use]
    pub fn breadth_first() -> Self {
        Self {
            discipline: FrontierDiscipline::Fifo,
            dedup: DedupScope::VisitedAndOpen,
            max_depth: None,
            max_expansions: None,
        }
    }

    /// Depth-first, full dedup, unbounded.
    #[must_use]
    pub fn depth_first() -> Self {
        Self {
            discipline: FrontierDiscipline::Lifo,
            ..Self::breadth_first()
        }
    }

    /// Settings for enumerating every derivation: candidates are never
    /// filtered and depth is bounded by [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub fn ambiguity(discipline: FrontierDiscipline) -> Self {
        Self {
            discipline,
            dedup: DedupScope::ExtractionOnly,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_expansions: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::breadth_first()
    }
}
