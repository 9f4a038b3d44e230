//! Motor intent: what the core asks the motor driver to do.

use super::floor::{Direction, Floor};
use serde::{Deserialize, Serialize};

/// Desired motor behaviour for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotorIntent {
    Up,
    Down,
    Hold,
}

impl MotorIntent {
    /// Resolve the intent that brings the car from `current` to `target`.
    ///
    /// Pure and total: `Hold` exactly when the car is already there.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elevator_core::core::{Floor, MotorIntent};
    ///
    /// let two = Floor::new(2).unwrap();
    /// assert_eq!(MotorIntent::resolve(Floor::TOP, two), MotorIntent::Up);
    /// assert_eq!(MotorIntent::resolve(two, two), MotorIntent::Hold);
    /// ```
    pub fn resolve(target: Floor, current: Floor) -> Self {
        match target.cmp(&current) {
            std::cmp::Ordering::Greater => MotorIntent::Up,
            std::cmp::Ordering::Less => MotorIntent::Down,
            std::cmp::Ordering::Equal => MotorIntent::Hold,
        }
    }

    /// Travel-limit interlock: never drive past the top or bottom floor.
    ///
    /// With the position unknown there is no limit to apply.
    pub fn limit(self, floor: Option<Floor>) -> Self {
        match (self, floor) {
            (MotorIntent::Up, Some(f)) if f == Floor::TOP => MotorIntent::Hold,
            (MotorIntent::Down, Some(f)) if f == Floor::BOTTOM => MotorIntent::Hold,
            (intent, _) => intent,
        }
    }

    /// Direction of travel, or `None` for `Hold`.
    pub fn direction(self) -> Option<Direction> {
        match self {
            MotorIntent::Up => Some(Direction::Up),
            MotorIntent::Down => Some(Direction::Down),
            MotorIntent::Hold => None,
        }
    }
}

impl From<Direction> for MotorIntent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => MotorIntent::Up,
            Direction::Down => MotorIntent::Down,
        }
    }
}
