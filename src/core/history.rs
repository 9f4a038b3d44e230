//! State transition history tracking.
//!
//! A bounded log of the transitions the controller has made, for
//! diagnostics. It is kept outside [`Car`](super::Car) so the car carries
//! no state beyond what its transition table needs.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use elevator_core::core::{ElevatorState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ElevatorState::Initializing,
///     to: ElevatorState::Idle,
///     tick: 3,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.tick, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Tick counter value at which the transition happened
    pub tick: u64,
    /// Wall-clock time of the transition
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of the most recent state transitions.
///
/// Holds at most `capacity` transitions; recording into a full history
/// drops the oldest one.
///
/// # Example
///
/// ```rust
/// use elevator_core::core::{ElevatorState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_capacity(8);
/// history.record(StateTransition {
///     from: ElevatorState::Initializing,
///     to: ElevatorState::Idle,
///     tick: 2,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: ElevatorState::Idle,
///     to: ElevatorState::MovingToCallUp,
///     tick: 5,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 3); // Initializing -> Idle -> MovingToCallUp
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    capacity: usize,
    transitions: VecDeque<StateTransition<S>>,
}

impl<S: State> StateHistory<S> {
    /// Default number of retained transitions.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Create an empty history retaining at most `capacity` transitions.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a transition, evicting the oldest if the history is full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition, then
    /// the `to` state of each transition.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Wall-clock time between the oldest and newest retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    /// The most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Number of retained transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transition has been retained.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Maximum number of transitions retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ElevatorState;

    fn transition(from: ElevatorState, to: ElevatorState, tick: u64) -> StateTransition<ElevatorState> {
        StateTransition {
            from,
            to,
            tick,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<ElevatorState> = StateHistory::default();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.capacity(), StateHistory::<ElevatorState>::DEFAULT_CAPACITY);
    }

    #[test]
    fn path_returns_state_sequence() {
        let mut history = StateHistory::default();
        history.record(transition(ElevatorState::Initializing, ElevatorState::Idle, 1));
        history.record(transition(
            ElevatorState::Idle,
            ElevatorState::AwaitingSelection,
            4,
        ));

        assert_eq!(
            history.path(),
            vec![
                &ElevatorState::Initializing,
                &ElevatorState::Idle,
                &ElevatorState::AwaitingSelection
            ]
        );
        assert_eq!(history.last().map(|t| t.tick), Some(4));
    }

    #[test]
    fn full_history_drops_oldest() {
        let mut history = StateHistory::with_capacity(2);
        history.record(transition(ElevatorState::Initializing, ElevatorState::Idle, 1));
        history.record(transition(ElevatorState::Idle, ElevatorState::MovingToCallUp, 2));
        history.record(transition(
            ElevatorState::MovingToCallUp,
            ElevatorState::AwaitingSelection,
            3,
        ));

        assert_eq!(history.len(), 2);
        let ticks: Vec<u64> = history.transitions().map(|t| t.tick).collect();
        assert_eq!(ticks, vec![2, 3]);
        assert_eq!(history.path()[0], &ElevatorState::Idle);
    }

    #[test]
    fn zero_capacity_still_keeps_the_latest() {
        let mut history = StateHistory::with_capacity(0);
        history.record(transition(ElevatorState::Initializing, ElevatorState::Idle, 1));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let mut history = StateHistory::default();
        history.record(transition(ElevatorState::Initializing, ElevatorState::Idle, 1));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_capacity(4);
        history.record(transition(ElevatorState::Initializing, ElevatorState::Idle, 1));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<ElevatorState> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.capacity(), 4);
    }
}
