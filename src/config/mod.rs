//! Controller configuration.
//!
//! Configuration is read from JSON with every field optional, then validated
//! with Stillwater's `Validation` so that all problems are reported in one
//! pass instead of one per attempt.
//!
//! # Example
//!
//! ```rust
//! use elevator_core::config::ElevatorConfig;
//!
//! let config = ElevatorConfig::from_json(r#"{ "drive": { "up_duty": 450 } }"#).unwrap();
//! assert_eq!(config.drive.up_duty, 450);
//! assert_eq!(config.drive.down_duty, 300);
//!
//! let err = ElevatorConfig::from_json(r#"{ "tick_interval_ms": 0, "history_capacity": 0 }"#);
//! assert!(err.is_err());
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::Direction;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Motor PWM settings, in timer counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// PWM period
    pub period: u16,
    /// On-time while raising the car
    pub up_duty: u16,
    /// On-time while lowering the car; gravity helps, so it runs lower
    pub down_duty: u16,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            period: 1000,
            up_duty: 400,
            down_duty: 300,
        }
    }
}

impl DriveConfig {
    fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks = vec![check(self.period != 0, ConfigViolation::ZeroPeriod)];

        for (direction, duty) in [
            (Direction::Up, self.up_duty),
            (Direction::Down, self.down_duty),
        ] {
            checks.push(check(duty != 0, ConfigViolation::ZeroDuty { direction }));
            checks.push(check(
                duty <= self.period,
                ConfigViolation::DutyExceedsPeriod {
                    direction,
                    duty,
                    period: self.period,
                },
            ));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevatorConfig {
    pub drive: DriveConfig,
    /// Sampling period of the tick source
    pub tick_interval_ms: u64,
    /// Number of state transitions the controller retains
    pub history_capacity: usize,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        Self {
            drive: DriveConfig::default(),
            tick_interval_ms: 8,
            history_capacity: 64,
        }
    }
}

impl ElevatorConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![
            self.drive.validate(),
            check(self.tick_interval_ms != 0, ConfigViolation::ZeroTickInterval),
            check(
                self.history_capacity != 0,
                ConfigViolation::ZeroHistoryCapacity,
            ),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Return the configuration if it is valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

fn check(ok: bool, violation: ConfigViolation) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
