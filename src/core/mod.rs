//! Control core of the elevator.
//!
//! This module is the pure part of the crate: it knows floors, directions
//! and states, never hardware. Everything here is driven through [`Car`]:
//! - [`Car::update_position`]: position tracker
//! - [`Car::accept_call`]: call handler
//! - [`Car::select_destination`]: destination handler
//! - [`Car::tick`]: state machine, one evaluation per sampling period
//!
//! [`MotorIntent::resolve`] is the pure intent resolver the handlers use.

mod call;
mod car;
mod destination;
mod floor;
mod history;
mod intent;
mod invariants;
mod machine;
mod position;
mod state;

pub use car::{Car, PendingCall};
pub use floor::{Direction, Floor, FloorError};
pub use history::{StateHistory, StateTransition};
pub use intent::MotorIntent;
pub use invariants::InvariantViolation;
pub use machine::{StateChange, TickInputs, TickOutputs};
pub use state::{ElevatorState, State};
