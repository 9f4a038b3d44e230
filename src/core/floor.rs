//! Floors and travel directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced when constructing a [`Floor`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FloorError {
    #[error("floor {0} is outside the serviceable range 1..=4")]
    OutOfRange(u8),
}

/// A serviceable floor of the shaft, always in `1..=4`.
///
/// Floors are ordered bottom to top, so comparing two floors tells which way
/// the car has to travel between them.
///
/// # Example
///
/// ```rust
/// use elevator_core::core::Floor;
///
/// let lobby = Floor::new(1).unwrap();
/// assert_eq!(lobby, Floor::BOTTOM);
/// assert!(Floor::new(5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Floor(u8);

impl Floor {
    /// Lowest serviceable floor, where the car homes after power-on.
    pub const BOTTOM: Floor = Floor(1);

    /// Highest serviceable floor.
    pub const TOP: Floor = Floor(4);

    /// Number of serviceable floors.
    pub const COUNT: usize = 4;

    /// Create a floor, rejecting numbers outside `1..=4`.
    pub fn new(number: u8) -> Result<Self, FloorError> {
        if (Self::BOTTOM.0..=Self::TOP.0).contains(&number) {
            Ok(Floor(number))
        } else {
            Err(FloorError::OutOfRange(number))
        }
    }

    /// The floor number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether this is the top or bottom floor.
    pub fn is_terminal(self) -> bool {
        self == Self::BOTTOM || self == Self::TOP
    }

    /// The next floor up, if any.
    pub fn above(self) -> Option<Floor> {
        Floor::new(self.0 + 1).ok()
    }

    /// The next floor down, if any.
    pub fn below(self) -> Option<Floor> {
        self.0.checked_sub(1).and_then(|n| Floor::new(n).ok())
    }

    /// Number of floors between `self` and `other`.
    pub fn distance(self, other: Floor) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// All floors, bottom to top.
    pub fn all() -> impl Iterator<Item = Floor> {
        (Self::BOTTOM.0..=Self::TOP.0).map(Floor)
    }
}

impl TryFrom<u8> for Floor {
    type Error = FloorError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Floor::new(number)
    }
}

impl From<Floor> for u8 {
    fn from(floor: Floor) -> Self {
        floor.0
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of travel implied by a tower call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Whether moving from `from` to `to` travels in this direction.
    pub fn extends(self, from: Floor, to: Floor) -> bool {
        match self {
            Direction::Up => to > from,
            Direction::Down => to < from,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}
