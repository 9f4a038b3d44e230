//! Invariant checker for the car.

use super::car::Car;
use super::state::ElevatorState;
use thiserror::Error;

/// A broken car invariant, naming the state it was found in.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("pending call present={present} does not match state {state}")]
    PendingCall { state: ElevatorState, present: bool },

    #[error("pending destination present={present} does not match state {state}")]
    PendingDestination { state: ElevatorState, present: bool },

    #[error("position unknown in state {state}")]
    UnknownPosition { state: ElevatorState },
}

impl Car {
    /// Check all invariants. Returns the first one violated.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let state = self.state;

        let present = self.pending_call.is_some();
        if present != state.holds_call() {
            return Err(InvariantViolation::PendingCall { state, present });
        }

        let present = self.pending_destination.is_some();
        if present != state.holds_destination() {
            return Err(InvariantViolation::PendingDestination { state, present });
        }

        if state != ElevatorState::Initializing && self.current_floor.is_none() {
            return Err(InvariantViolation::UnknownPosition { state });
        }

        Ok(())
    }
}
