//! Imperative shell around the control core.
//!
//! The core only speaks floors and intents. This module supplies what sits
//! between it and the device:
//! - **Decoding**: priority-encoder addresses to floors and calls
//! - **Drive**: intents to H-bridge commands with per-direction duty cycles
//! - **Controller**: one tick per sampling period, forwarding outputs to
//!   the [`MotorDriver`] and [`FloorDisplay`] and recording state history

pub mod controller;
pub mod decode;
pub mod drive;

pub use controller::Controller;
pub use decode::{DecodeError, RawSample};
pub use drive::{DriveCommand, FloorDisplay, MotorDriver};
