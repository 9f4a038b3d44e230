//! The car: the single mutable value the controller owns.

use super::floor::{Direction, Floor};
use super::state::ElevatorState;
use serde::{Deserialize, Serialize};

/// A tower call that has been accepted and not yet handed over to a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCall {
    /// Floor the car was called to
    pub floor: Floor,
    /// Direction the caller wants to travel from there
    pub direction: Direction,
}

/// State of the one elevator car.
///
/// Every field changes only through the handlers (`accept_call`,
/// `select_destination`, `update_position`) and [`Car::tick`], so the
/// invariants in [`Car::check_invariants`] hold between ticks.
///
/// # Example
///
/// ```rust
/// use elevator_core::core::{Car, ElevatorState};
///
/// let car = Car::new();
/// assert_eq!(car.state(), ElevatorState::Initializing);
/// assert_eq!(car.current_floor(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub(super) state: ElevatorState,
    pub(super) current_floor: Option<Floor>,
    pub(super) pending_call: Option<PendingCall>,
    pub(super) pending_destination: Option<Floor>,
}

impl Car {
    /// Create a car at power-on: initializing, position unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current controller state.
    pub fn state(&self) -> ElevatorState {
        self.state
    }

    /// Last floor reported by the position sensors.
    pub fn current_floor(&self) -> Option<Floor> {
        self.current_floor
    }

    /// Call being served, until a destination takes over.
    pub fn pending_call(&self) -> Option<PendingCall> {
        self.pending_call
    }

    /// Destination the passenger selected.
    pub fn pending_destination(&self) -> Option<Floor> {
        self.pending_destination
    }

    /// Re-enter `Initializing`, dropping any call or destination in progress.
    ///
    /// The last sensed floor is kept: only a sensor event may change it.
    pub fn reset(&mut self) {
        log::info!("car reset from {}", self.state);
        self.state = ElevatorState::Initializing;
        self.pending_call = None;
        self.pending_destination = None;
    }

    pub(super) fn enter(&mut self, next: ElevatorState) {
        if next != self.state {
            log::info!("car {} -> {}", self.state, next);
            self.state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_car_is_homing_with_nothing_pending() {
        let car = Car::new();
        assert_eq!(car.state(), ElevatorState::Initializing);
        assert!(car.pending_call().is_none());
        assert!(car.pending_destination().is_none());
    }

    #[test]
    fn reset_keeps_position_and_drops_requests() {
        let mut car = Car {
            state: ElevatorState::AwaitingSelection,
            current_floor: Some(Floor::TOP),
            pending_call: Some(PendingCall {
                floor: Floor::TOP,
                direction: Direction::Down,
            }),
            pending_destination: None,
        };

        car.reset();

        assert_eq!(car.state(), ElevatorState::Initializing);
        assert_eq!(car.current_floor(), Some(Floor::TOP));
        assert!(car.pending_call().is_none());
    }

    #[test]
    fn car_serializes_correctly() {
        let car = Car::new();
        let json = serde_json::to_string(&car).unwrap();
        let back: Car = serde_json::from_str(&json).unwrap();
        assert_eq!(car, back);
    }
}
