//! elevator-core: control core for a single-car, four-floor elevator.
//!
//! The crate follows a "pure core, imperative shell" split. The core is a
//! seven-state machine evaluated once per sampling tick; it consumes decoded
//! events and emits a motor intent and the floor to display. The shell
//! decodes raw encoder addresses, translates intents into motor drive
//! commands and keeps a history of transitions.
//!
//! # Core Concepts
//!
//! - **Car**: the single owned value holding state, position and requests
//! - **Tick**: position first, then call, then selection, then the table
//! - **Single flight**: one call is served end to end before another is
//!   accepted; calls made while busy are rejected, never queued
//!
//! # Example
//!
//! ```rust
//! use elevator_core::core::{Car, Direction, ElevatorState, Floor, MotorIntent, TickInputs};
//!
//! let mut car = Car::new();
//! car.tick(TickInputs::position(Floor::BOTTOM));
//! assert_eq!(car.state(), ElevatorState::Idle);
//!
//! let third = Floor::new(3).unwrap();
//! let out = car.tick(TickInputs::call(third, Direction::Up));
//! assert_eq!(out.motor_intent, MotorIntent::Up);
//!
//! car.tick(TickInputs::position(Floor::new(2).unwrap()));
//! let out = car.tick(TickInputs::position(third));
//! assert_eq!(out.motor_intent, MotorIntent::Hold);
//! assert_eq!(car.state(), ElevatorState::AwaitingSelection);
//! ```

pub mod config;
pub mod core;
pub mod shell;

// Re-export commonly used types
pub use crate::config::{ConfigError, ElevatorConfig};
pub use crate::core::{Car, Direction, ElevatorState, Floor, MotorIntent, TickInputs, TickOutputs};
pub use crate::shell::Controller;
