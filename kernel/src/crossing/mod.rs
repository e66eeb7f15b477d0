//! River-crossing primitives: states, moves, and move validity.

pub mod moves;
pub mod state;

pub use moves::{standard_moves, CrossingError, CrossingRules, Move};
pub use state::{Bank, CrossingState};
