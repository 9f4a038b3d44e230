//! Configuration errors.

use crate::core::Direction;
use std::path::PathBuf;
use thiserror::Error;

/// A single rule broken by a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("PWM period must be non-zero")]
    ZeroPeriod,

    #[error("{direction} duty cycle must be non-zero")]
    ZeroDuty { direction: Direction },

    #[error("{direction} duty cycle {duty} exceeds PWM period {period}")]
    DutyExceedsPeriod {
        direction: Direction,
        duty: u16,
        period: u16,
    },

    #[error("tick interval must be non-zero")]
    ZeroTickInterval,

    #[error("history capacity must be non-zero")]
    ZeroHistoryCapacity,
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every violation found, not just the first
    #[error("invalid config: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
