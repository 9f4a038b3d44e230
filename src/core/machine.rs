//! The tick: one evaluation step of the state machine.

use super::car::Car;
use super::floor::{Direction, Floor};
use super::intent::MotorIntent;
use super::state::ElevatorState;
use serde::{Deserialize, Serialize};

/// Decoded events sampled at the start of a tick, at most one per source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInputs {
    /// Present iff a position sensor fired this tick
    pub sensed_position: Option<Floor>,
    /// Present iff a tower call button was pressed this tick
    pub tower_call: Option<(Floor, Direction)>,
    /// Present iff a destination button was pressed this tick
    pub cabin_selection: Option<Floor>,
}

impl TickInputs {
    /// A tick with no events.
    pub fn none() -> Self {
        Self::default()
    }

    /// A tick carrying only a position reading.
    pub fn position(floor: Floor) -> Self {
        Self {
            sensed_position: Some(floor),
            ..Self::default()
        }
    }

    /// A tick carrying only a tower call.
    pub fn call(floor: Floor, direction: Direction) -> Self {
        Self {
            tower_call: Some((floor, direction)),
            ..Self::default()
        }
    }

    /// A tick carrying only a destination selection.
    pub fn selection(floor: Floor) -> Self {
        Self {
            cabin_selection: Some(floor),
            ..Self::default()
        }
    }
}

/// One state change made during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub from: ElevatorState,
    pub to: ElevatorState,
}

/// Commands emitted by a tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutputs {
    /// Intent after the travel-limit interlock
    pub motor_intent: MotorIntent,
    /// Floor to show, present whenever a position reading was applied
    pub display_floor: Option<Floor>,
    /// Whether the reading put the car at the top or bottom floor
    pub limit_reached: bool,
    /// Every state change made this tick, in order
    pub changes: Vec<StateChange>,
}

impl Car {
    /// Run one tick.
    ///
    /// The position reading is applied first, then the call, then the
    /// selection; the transition table is evaluated last against that
    /// snapshot so arrival is judged on the car's true position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elevator_core::core::{Car, ElevatorState, Floor, MotorIntent, TickInputs};
    ///
    /// let mut car = Car::new();
    /// let out = car.tick(TickInputs::none());
    /// assert_eq!(out.motor_intent, MotorIntent::Down);
    ///
    /// let out = car.tick(TickInputs::position(Floor::BOTTOM));
    /// assert_eq!(out.motor_intent, MotorIntent::Hold);
    /// assert_eq!(car.state(), ElevatorState::Idle);
    /// ```
    pub fn tick(&mut self, inputs: TickInputs) -> TickOutputs {
        let mut changes = Vec::new();
        let limit_stop = inputs
            .sensed_position
            .and_then(|floor| self.update_position(floor));
        if let Some((floor, direction)) = inputs.tower_call {
            let from = self.state;
            self.accept_call(floor, direction);
            self.note_change(from, &mut changes);
        }
        if let Some(floor) = inputs.cabin_selection {
            let from = self.state;
            self.select_destination(floor);
            self.note_change(from, &mut changes);
        }

        let from = self.state;
        let commanded = self.advance();
        self.note_change(from, &mut changes);
        let motor_intent = commanded.limit(self.current_floor);
        if motor_intent != commanded {
            log::warn!(
                "{:?} at floor {:?} blocked by travel limit",
                commanded,
                self.current_floor
            );
        }

        TickOutputs {
            motor_intent,
            display_floor: inputs.sensed_position.and(self.current_floor),
            limit_reached: limit_stop.is_some(),
            changes,
        }
    }

    fn note_change(&self, from: ElevatorState, changes: &mut Vec<StateChange>) {
        if self.state != from {
            changes.push(StateChange {
                from,
                to: self.state,
            });
        }
    }

    /// Evaluate the transition table and return the commanded intent.
    fn advance(&mut self) -> MotorIntent {
        let current = self.current_floor;
        let at = |target: Option<Floor>| target.is_some() && target == current;

        match self.state {
            ElevatorState::Initializing => {
                if self.current_floor == Some(Floor::BOTTOM) {
                    self.enter(ElevatorState::Idle);
                    MotorIntent::Hold
                } else {
                    MotorIntent::Down
                }
            }
            ElevatorState::Idle => MotorIntent::Hold,
            ElevatorState::MovingToCallUp | ElevatorState::MovingToCallDown => {
                if at(self.pending_call.map(|call| call.floor)) {
                    self.enter(ElevatorState::AwaitingSelection);
                    MotorIntent::Hold
                } else if self.state == ElevatorState::MovingToCallUp {
                    MotorIntent::Up
                } else {
                    MotorIntent::Down
                }
            }
            ElevatorState::AwaitingSelection => MotorIntent::Hold,
            ElevatorState::MovingToDestinationUp | ElevatorState::MovingToDestinationDown => {
                if at(self.pending_destination) {
                    self.pending_call = None;
                    self.pending_destination = None;
                    self.enter(ElevatorState::Idle);
                    MotorIntent::Hold
                } else if self.state == ElevatorState::MovingToDestinationUp {
                    MotorIntent::Up
                } else {
                    MotorIntent::Down
                }
            }
        }
    }
}
