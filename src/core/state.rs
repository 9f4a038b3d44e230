//! States of the elevator controller.
//!
//! The [`State`] trait is what the transition history is generic over;
//! [`ElevatorState`] is the one closed set of states the car moves through.

use super::floor::Direction;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing where the
/// controller currently is.
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: needed for history tracking and change detection
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: transition history can be exported as JSON
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a resting state, one in which the machine holds still
    /// until an external event arrives.
    ///
    /// Default implementation returns `false`.
    fn is_resting(&self) -> bool {
        false
    }
}

/// The seven states of the car.
///
/// # Example
///
/// ```rust
/// use elevator_core::core::{ElevatorState, State};
///
/// assert_eq!(ElevatorState::default(), ElevatorState::Initializing);
/// assert!(ElevatorState::Idle.is_resting());
/// assert!(!ElevatorState::MovingToCallUp.is_resting());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElevatorState {
    /// Homing to the bottom floor after power-on or reset.
    #[default]
    Initializing,
    /// Waiting to be called.
    Idle,
    /// Travelling up to a called floor to pick up a passenger.
    MovingToCallUp,
    /// Travelling down to a called floor to pick up a passenger.
    MovingToCallDown,
    /// Parked at the called floor, waiting for the passenger's selection.
    AwaitingSelection,
    /// Carrying a passenger up.
    MovingToDestinationUp,
    /// Carrying a passenger down.
    MovingToDestinationDown,
}

impl ElevatorState {
    /// Whether the pending call is still part of this state.
    pub fn holds_call(self) -> bool {
        matches!(
            self,
            Self::MovingToCallUp | Self::MovingToCallDown | Self::AwaitingSelection
        )
    }

    /// Whether a passenger destination is being served.
    pub fn holds_destination(self) -> bool {
        matches!(
            self,
            Self::MovingToDestinationUp | Self::MovingToDestinationDown
        )
    }

    /// Direction the car is commanded to travel in this state, if any.
    ///
    /// `Initializing` reports `Down` since homing always descends.
    pub fn travel(self) -> Option<Direction> {
        match self {
            Self::Initializing | Self::MovingToCallDown | Self::MovingToDestinationDown => {
                Some(Direction::Down)
            }
            Self::MovingToCallUp | Self::MovingToDestinationUp => Some(Direction::Up),
            Self::Idle | Self::AwaitingSelection => None,
        }
    }

    pub(crate) fn moving_to_call(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::MovingToCallUp,
            Direction::Down => Self::MovingToCallDown,
        }
    }

    pub(crate) fn moving_to_destination(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::MovingToDestinationUp,
            Direction::Down => Self::MovingToDestinationDown,
        }
    }
}

impl State for ElevatorState {
    fn name(&self) -> &str {
        match self {
            Self::Initializing => "Initializing",
            Self::Idle => "Idle",
            Self::MovingToCallUp => "MovingToCallUp",
            Self::MovingToCallDown => "MovingToCallDown",
            Self::AwaitingSelection => "AwaitingSelection",
            Self::MovingToDestinationUp => "MovingToDestinationUp",
            Self::MovingToDestinationDown => "MovingToDestinationDown",
        }
    }

    fn is_resting(&self) -> bool {
        matches!(self, Self::Idle | Self::AwaitingSelection)
    }
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
