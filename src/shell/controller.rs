//! Controller: the imperative shell wiring the car to its collaborators.

use super::decode::RawSample;
use super::drive::{DriveCommand, FloorDisplay, MotorDriver};
use crate::config::{DriveConfig, ElevatorConfig};
use crate::core::{
    Car, ElevatorState, StateChange, StateHistory, StateTransition, TickInputs, TickOutputs,
};
use chrono::Utc;

/// Owns the car and drives the motor and display from its outputs.
///
/// The host calls [`Controller::step`] (or [`Controller::sample`]) once per
/// sampling period and must not call it re-entrantly.
pub struct Controller<M: MotorDriver, D: FloorDisplay> {
    car: Car,
    drive: DriveConfig,
    motor: M,
    display: D,
    history: StateHistory<ElevatorState>,
    ticks: u64,
}

impl<M: MotorDriver, D: FloorDisplay> Controller<M, D> {
    /// Create a controller at power-on.
    pub fn new(config: &ElevatorConfig, motor: M, display: D) -> Self {
        Self {
            car: Car::new(),
            drive: config.drive.clone(),
            motor,
            display,
            history: StateHistory::with_capacity(config.history_capacity),
            ticks: 0,
        }
    }

    /// Run one tick on decoded inputs and forward the outputs.
    pub fn step(&mut self, inputs: TickInputs) -> TickOutputs {
        self.ticks += 1;

        let outputs = self.car.tick(inputs);
        if let Some(floor) = outputs.display_floor {
            self.display.show(floor);
        }
        self.motor
            .drive(DriveCommand::from_intent(outputs.motor_intent, &self.drive));

        for change in &outputs.changes {
            self.record(*change);
        }
        if let Err(violation) = self.car.check_invariants() {
            log::error!("tick {}: {violation}", self.ticks);
        }
        outputs
    }

    /// Decode a raw sample and run one tick on it.
    pub fn sample(&mut self, raw: RawSample) -> TickOutputs {
        self.step(raw.decode())
    }

    /// Send the car back to homing.
    pub fn reset(&mut self) {
        let from = self.car.state();
        self.car.reset();
        let to = self.car.state();
        if to != from {
            self.record(StateChange { from, to });
        }
    }

    fn record(&mut self, change: StateChange) {
        self.history.record(StateTransition {
            from: change.from,
            to: change.to,
            tick: self.ticks,
            timestamp: Utc::now(),
        });
    }

    /// The car as of the last tick.
    pub fn car(&self) -> &Car {
        &self.car
    }

    /// Transitions recorded so far, oldest first.
    pub fn history(&self) -> &StateHistory<ElevatorState> {
        &self.history
    }

    /// Number of ticks run since power-on.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The motor driver.
    pub fn motor(&self) -> &M {
        &self.motor
    }

    /// The floor display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Release the collaborators.
    pub fn into_parts(self) -> (M, D) {
        (self.motor, self.display)
    }
}
