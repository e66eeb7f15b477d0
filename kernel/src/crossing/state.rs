//! River-crossing state: counts on each bank plus the boat position.

use serde::{Deserialize, Serialize};

/// Which bank the boat is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bank {
    Left,
    Right,
}

impl Bank {
    /// The other bank.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Tuple encoding: `1` = left, `0` = right.
    #[must_use]
    pub fn flag(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 0,
        }
    }
}

/// `(missionaries_left, cannibals_left, boat, missionaries_right, cannibals_right)`.
///
/// Serialized as the five-element array `[ml, cl, boat, mr, cr]` with
/// `boat = 1` meaning the left bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 5]", into = "[u8; 5]")]
pub struct CrossingState {
    pub missionaries_left: u8,
    pub cannibals_left: u8,
    pub boat: Bank,
    pub missionaries_right: u8,
    pub cannibals_right: u8,
}

impl CrossingState {
    /// Build from the five-tuple encoding.
    ///
    /// Returns `None` when the boat flag is neither `0` nor `1`.
    #[must_use]
    pub fn from_tuple(t: (u8, u8, u8, u8, u8)) -> Option<Self> {
        let boat = match t.2 {
            1 => Bank::Left,
            0 => Bank::Right,
            _ => return None,
        };
        Some(Self {
            missionaries_left: t.0,
            cannibals_left: t.1,
            boat,
            missionaries_right: t.3,
            cannibals_right: t.4,
        })
    }

    /// The five-tuple encoding.
    #[must_use]
    pub fn as_tuple(&self) -> (u8, u8, u8, u8, u8) {
        (
            self.missionaries_left,
            self.cannibals_left,
            self.boat.flag(),
            self.missionaries_right,
            self.cannibals_right,
        )
    }

    /// No bank has missionaries outnumbered by cannibals.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        let bank_ok = |m: u8, c: u8| m == 0 || c <= m;
        bank_ok(self.missionaries_left, self.cannibals_left)
            && bank_ok(self.missionaries_right, self.cannibals_right)
    }
}

impl std::fmt::Display for CrossingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (ml, cl, b, mr, cr) = self.as_tuple();
        write!(f, "({ml}, {cl}, {b}, {mr}, {cr})")
    }
}

impl TryFrom<[u8; 5]> for CrossingState {
    type Error = String;

    fn try_from(a: [u8; 5]) -> Result<Self, Self::Error> {
        Self::from_tuple((a[0], a[1], a[2], a[3], a[4]))
            .ok_or_else(|| format!("boat flag must be 0 or 1, got {}", a[2]))
    }
}

impl From<CrossingState> for [u8; 5] {
    fn from(s: CrossingState) -> Self {
        let (ml, cl, b, mr, cr) = s.as_tuple();
        [ml, cl, b, mr, cr]
    }
}
