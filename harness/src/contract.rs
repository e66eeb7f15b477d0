//! World contract: a state generator plus the problem's endpoints.
//!
//! Worlds bind kernel primitives (rule tables, crossing rules) to the
//! search crate's [`StateGenerator`]. They do not run searches, time them,
//! or format results; those are runner and report concerns.

use wayfinder_search::contract::StateGenerator;

/// A searchable problem instance.
pub trait SearchWorld: StateGenerator {
    /// Stable identifier (e.g. `"grammar"`, `"river_crossing"`).
    fn world_id(&self) -> &str;

    /// Where every search starts.
    fn initial_state(&self) -> Self::State;

    /// The single concrete goal.
    fn goal_state(&self) -> Self::State;
}
