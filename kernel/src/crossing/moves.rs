//! Boat moves and the rules that decide which moves are legal.

use serde::{Deserialize, Serialize};

use crate::crossing::state::{Bank, CrossingState};

/// Default number of missionaries (and of cannibals).
pub const DEFAULT_POPULATION: u8 = 3;

/// Default boat capacity.
pub const DEFAULT_BOAT_CAPACITY: u8 = 2;

/// One boat trip: who is on board. Direction follows the boat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub label: String,
    pub missionaries: u8,
    pub cannibals: u8,
}

impl Move {
    /// A move labelled after its passengers, e.g. `1M+1C`, `2C`.
    #[must_use]
    pub fn new(missionaries: u8, cannibals: u8) -> Self {
        let label = match (missionaries, cannibals) {
            (0, c) => format!("{c}C"),
            (m, 0) => format!("{m}M"),
            (m, c) => format!("{m}M+{c}C"),
        };
        Self {
            label,
            missionaries,
            cannibals,
        }
    }

    fn passengers(&self) -> u16 {
        u16::from(self.missionaries) + u16::from(self.cannibals)
    }
}

/// The classic five moves in their canonical enumeration order:
/// `1M+1C`, `2C`, `2M`, `1C`, `1M`.
#[must_use]
pub fn standard_moves() -> Vec<Move> {
    vec![
        Move::new(1, 1),
        Move::new(0, 2),
        Move::new(2, 0),
        Move::new(0, 1),
        Move::new(1, 0),
    ]
}

/// Error type for crossing rule construction and state validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossingError {
    /// Population must be at least one.
    ZeroPopulation,
    /// The boat must carry at least one person.
    ZeroBoatCapacity,
    /// No moves were supplied.
    EmptyMoveTable,
    /// A move carries nobody.
    EmptyMove { label: String },
    /// A move carries more people than the boat holds.
    MoveExceedsCapacity { label: String, capacity: u8 },
    /// Two moves share a label.
    DuplicateMoveLabel { label: String },
    /// A state is outside the rules (counts, totals, or safety).
    InvalidState { state: String, detail: String },
}

impl std::fmt::Display for CrossingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPopulation => write!(f, "population must be at least 1"),
            Self::ZeroBoatCapacity => write!(f, "boat capacity must be at least 1"),
            Self::EmptyMoveTable => write!(f, "move table is empty"),
            Self::EmptyMove { label } => write!(f, "move {label:?} carries nobody"),
            Self::MoveExceedsCapacity { label, capacity } => {
                write!(f, "move {label:?} exceeds boat capacity {capacity}")
            }
            Self::DuplicateMoveLabel { label } => write!(f, "move label {label:?} is repeated"),
            Self::InvalidState { state, detail } => write!(f, "invalid state {state}: {detail}"),
        }
    }
}

impl std::error::Error for CrossingError {}

/// A validated crossing problem: population, boat capacity, move table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossingRules {
    population: u8,
    boat_capacity: u8,
    moves: Vec<Move>,
}

impl CrossingRules {
    /// # Errors
    ///
    /// Returns [`CrossingError`] if the population or capacity is zero, the
    /// move table is empty, or a move is empty, over capacity, or repeated.
    pub fn new(population: u8, boat_capacity: u8, moves: Vec<Move>) -> Result<Self, CrossingError> {
        if population == 0 {
            return Err(CrossingError::ZeroPopulation);
        }
        if boat_capacity == 0 {
            return Err(CrossingError::ZeroBoatCapacity);
        }
        if moves.is_empty() {
            return Err(CrossingError::EmptyMoveTable);
        }
        for (i, mv) in moves.iter().enumerate() {
            if mv.passengers() == 0 {
                return Err(CrossingError::EmptyMove {
                    label: mv.label.clone(),
                });
            }
            if mv.passengers() > u16::from(boat_capacity) {
                return Err(CrossingError::MoveExceedsCapacity {
                    label: mv.label.clone(),
                    capacity: boat_capacity,
                });
            }
            if moves[..i].iter().any(|m| m.label == mv.label) {
                return Err(CrossingError::DuplicateMoveLabel {
                    label: mv.label.clone(),
                });
            }
        }
        Ok(Self {
            population,
            boat_capacity,
            moves,
        })
    }

    /// Three missionaries, three cannibals, a two-seat boat, five moves.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            boat_capacity: DEFAULT_BOAT_CAPACITY,
            moves: standard_moves(),
        }
    }

    #[must_use]
    pub fn population(&self) -> u8 {
        self.population
    }

    #[must_use]
    pub fn boat_capacity(&self) -> u8 {
        self.boat_capacity
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Everyone on the left bank with the boat.
    #[must_use]
    pub fn initial_state(&self) -> CrossingState {
        CrossingState {
            missionaries_left: self.population,
            cannibals_left: self.population,
            boat: Bank::Left,
            missionaries_right: 0,
            cannibals_right: 0,
        }
    }

    /// Everyone on the right bank with the boat.
    #[must_use]
    pub fn goal_state(&self) -> CrossingState {
        CrossingState {
            missionaries_left: 0,
            cannibals_left: 0,
            boat: Bank::Right,
            missionaries_right: self.population,
            cannibals_right: self.population,
        }
    }

    /// Counts within `[0, population]`, totals conserved, both banks safe.
    #[must_use]
    pub fn is_valid(&self, state: &CrossingState) -> bool {
        self.violation(state).is_none()
    }

    /// # Errors
    ///
    /// Returns [`CrossingError::InvalidState`] describing the first broken rule.
    pub fn validate_state(&self, state: &CrossingState) -> Result<(), CrossingError> {
        match self.violation(state) {
            None => Ok(()),
            Some(detail) => Err(CrossingError::InvalidState {
                state: state.to_string(),
                detail: detail.to_string(),
            }),
        }
    }

    fn violation(&self, state: &CrossingState) -> Option<&'static str> {
        let n = self.population;
        let (ml, cl, _, mr, cr) = state.as_tuple();
        if [ml, cl, mr, cr].iter().any(|&v| v > n) {
            return Some("count exceeds population");
        }
        if u16::from(ml) + u16::from(mr) != u16::from(n)
            || u16::from(cl) + u16::from(cr) != u16::from(n)
        {
            return Some("bank totals do not match population");
        }
        if !state.is_safe() {
            return Some("cannibals outnumber missionaries");
        }
        None
    }

    /// Ferry `mv` across from the boat's bank, if the result is valid.
    #[must_use]
    pub fn apply(&self, state: &CrossingState, mv: &Move) -> Option<CrossingState> {
        let (from_m, from_c, to_m, to_c) = match state.boat {
            Bank::Left => (
                state.missionaries_left,
                state.cannibals_left,
                state.missionaries_right,
                state.cannibals_right,
            ),
            Bank::Right => (
                state.missionaries_right,
                state.cannibals_right,
                state.missionaries_left,
                state.cannibals_left,
            ),
        };

        let from_m = from_m.checked_sub(mv.missionaries)?;
        let from_c = from_c.checked_sub(mv.cannibals)?;
        let to_m = to_m.checked_add(mv.missionaries)?;
        let to_c = to_c.checked_add(mv.cannibals)?;

        let next = match state.boat {
            Bank::Left => CrossingState {
                missionaries_left: from_m,
                cannibals_left: from_c,
                boat: Bank::Right,
                missionaries_right: to_m,
                cannibals_right: to_c,
            },
            Bank::Right => CrossingState {
                missionaries_left: to_m,
                cannibals_left: to_c,
                boat: Bank::Left,
                missionaries_right: from_m,
                cannibals_right: from_c,
            },
        };

        self.is_valid(&next).then_some(next)
    }

    /// Every legal `(label, next_state)` from `state`, in move-table order.
    #[must_use]
    pub fn successors(&self, state: &CrossingState) -> Vec<(String, CrossingState)> {
        self.moves
            .iter()
            .filter_map(|mv| self.apply(state, mv).map(|next| (mv.label.clone(), next)))
            .collect()
    }
}

impl Default for CrossingRules {
    fn default() -> Self {
        Self::standard()
    }
}
