//! FIFO / LIFO frontier.
//!
//! The discipline is fixed at construction. FIFO gives breadth-first order,
//! LIFO gives depth-first order (the last child added is extracted first).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::node::NodeId;

/// Extraction order of a [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierDiscipline {
    /// Queue: oldest entry first (breadth-first).
    Fifo,
    /// Stack: newest entry first (depth-first).
    Lifo,
}

/// Ordered collection of pending nodes.
#[derive(Debug, Clone)]
pub struct Frontier<T = NodeId> {
    discipline: FrontierDiscipline,
    pending: VecDeque<T>,
    high_water: usize,
}

impl<T> Frontier<T> {
    #[must_use]
    pub fn new(discipline: FrontierDiscipline) -> Self {
        Self {
            discipline,
            pending: VecDeque::new(),
            high_water: 0,
        }
    }

    #[must_use]
    pub fn discipline(&self) -> FrontierDiscipline {
        self.discipline
    }

    /// Add one entry.
    pub fn push(&mut self, item: T) {
        self.pending.push_back(item);
        self.high_water = self.high_water.max(self.pending.len());
    }

    /// Add entries in iteration order.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }

    /// Remove the next entry according to the discipline.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] when nothing is pending.
    pub fn extract(&mut self) -> Result<T, SearchError> {
        let next = match self.discipline {
            FrontierDiscipline::Fifo => self.pending.pop_front(),
            FrontierDiscipline::Lifo => self.pending.pop_back(),
        };
        next.ok_or(SearchError::EmptyFrontier)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
