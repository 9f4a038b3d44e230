//! Destination handler: floor selections made inside the car.

use super::car::Car;
use super::floor::Floor;
use super::intent::MotorIntent;
use super::state::ElevatorState;

impl Car {
    /// Select the passenger's destination while the car waits at a called floor.
    ///
    /// The selection is honoured only if it continues travel in the direction
    /// the call was made in. Selections in any other state, for the current
    /// floor, or against the call's direction are ignored and return `false`.
    /// An accepted destination takes over from the pending call.
    pub fn select_destination(&mut self, floor: Floor) -> bool {
        if self.state != ElevatorState::AwaitingSelection {
            log::debug!("selection of {floor} ignored while {}", self.state);
            return false;
        }
        let (Some(current), Some(call)) = (self.current_floor, self.pending_call) else {
            return false;
        };

        let Some(travel) = MotorIntent::resolve(floor, current).direction() else {
            log::debug!("selection of {floor} ignored, already there");
            return false;
        };
        if travel != call.direction {
            log::debug!(
                "selection of {floor} ignored, call was {} from {}",
                call.direction,
                call.floor
            );
            return false;
        }

        self.pending_call = None;
        self.pending_destination = Some(floor);
        log::info!("destination {floor} accepted at {current}");
        self.enter(ElevatorState::moving_to_destination(travel));
        true
    }
}
