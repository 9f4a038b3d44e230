//! Call handler: on-tower requests to bring the car to a floor.

use super::car::{Car, PendingCall};
use super::floor::{Direction, Floor};
use super::intent::MotorIntent;
use super::state::ElevatorState;

impl Car {
    /// Accept a tower call if the car is free to serve it.
    ///
    /// Only an `Idle` car takes calls; anything else is silently rejected and
    /// returns `false`. A call with no matching button (up from the top floor,
    /// down from the bottom) is rejected the same way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elevator_core::core::{Car, Direction, ElevatorState, Floor, TickInputs};
    ///
    /// let mut car = Car::new();
    /// car.tick(TickInputs::position(Floor::BOTTOM));
    ///
    /// assert!(car.accept_call(Floor::new(3).unwrap(), Direction::Up));
    /// assert_eq!(car.state(), ElevatorState::MovingToCallUp);
    /// assert!(!car.accept_call(Floor::new(2).unwrap(), Direction::Down));
    /// ```
    pub fn accept_call(&mut self, floor: Floor, direction: Direction) -> bool {
        if self.state != ElevatorState::Idle {
            log::debug!("call to {floor} ({direction}) ignored while {}", self.state);
            return false;
        }
        if !has_call_button(floor, direction) {
            log::debug!("call to {floor} ({direction}) has no matching button");
            return false;
        }
        let Some(current) = self.current_floor else {
            return false;
        };

        self.pending_call = Some(PendingCall { floor, direction });
        let next = match MotorIntent::resolve(floor, current).direction() {
            Some(travel) => ElevatorState::moving_to_call(travel),
            None => ElevatorState::AwaitingSelection,
        };
        log::info!("call to {floor} ({direction}) accepted at {current}");
        self.enter(next);
        true
    }
}

fn has_call_button(floor: Floor, direction: Direction) -> bool {
    match direction {
        Direction::Up => floor != Floor::TOP,
        Direction::Down => floor != Floor::BOTTOM,
    }
}
