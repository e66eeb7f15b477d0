//! `RiverCrossing`: the missionaries-and-cannibals puzzle.
//!
//! Wraps validated [`CrossingRules`] with a start and goal state. Both
//! endpoints are checked against the rules at construction, so a search
//! never starts from (or aims at) a state the rules would reject.

use wayfinder_kernel::crossing::{CrossingError, CrossingRules, CrossingState};
use wayfinder_search::contract::StateGenerator;

use crate::contract::SearchWorld;

pub struct RiverCrossing {
    rules: CrossingRules,
    initial: CrossingState,
    goal: CrossingState,
}

impl RiverCrossing {
    /// # Errors
    ///
    /// Returns [`CrossingError::InvalidState`] if either endpoint breaks the
    /// rules.
    pub fn new(
        rules: CrossingRules,
        initial: CrossingState,
        goal: CrossingState,
    ) -> Result<Self, CrossingError> {
        rules.validate_state(&initial)?;
        rules.validate_state(&goal)?;
        Ok(Self {
            rules,
            initial,
            goal,
        })
    }

    /// Everyone starts on the left with the boat and must reach the right.
    #[must_use]
    pub fn from_rules(rules: CrossingRules) -> Self {
        let initial = rules.initial_state();
        let goal = rules.goal_state();
        Self {
            rules,
            initial,
            goal,
        }
    }

    /// Three and three, a two-seat boat, the five classic moves.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_rules(CrossingRules::standard())
    }

    #[must_use]
    pub fn rules(&self) -> &CrossingRules {
        &self.rules
    }
}

impl StateGenerator for RiverCrossing {
    type State = CrossingState;
    type Label = String;

    fn successors(&self, state: &CrossingState) -> Vec<(String, CrossingState)> {
        self.rules.successors(state)
    }
}

impl SearchWorld for RiverCrossing {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "river_crossing"
    }

    fn initial_state(&self) -> CrossingState {
        self.initial
    }

    fn goal_state(&self) -> CrossingState {
        self.goal
    }
}
