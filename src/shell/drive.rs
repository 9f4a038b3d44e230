//! Motor and display collaborators.

use crate::config::DriveConfig;
use crate::core::{Floor, MotorIntent};
use serde::{Deserialize, Serialize};

/// Command for an H-bridge motor driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveCommand {
    /// Drive upwards at the given PWM on-time
    Raise { duty: u16 },
    /// Drive downwards at the given PWM on-time
    Lower { duty: u16 },
    /// Both direction lines asserted: the motor is braked
    Brake,
}

impl DriveCommand {
    /// Translate a motor intent using the configured duty cycles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elevator_core::config::DriveConfig;
    /// use elevator_core::core::MotorIntent;
    /// use elevator_core::shell::DriveCommand;
    ///
    /// let drive = DriveConfig::default();
    /// assert_eq!(
    ///     DriveCommand::from_intent(MotorIntent::Up, &drive),
    ///     DriveCommand::Raise { duty: 400 }
    /// );
    /// ```
    pub fn from_intent(intent: MotorIntent, config: &DriveConfig) -> Self {
        match intent {
            MotorIntent::Up => DriveCommand::Raise {
                duty: config.up_duty,
            },
            MotorIntent::Down => DriveCommand::Lower {
                duty: config.down_duty,
            },
            MotorIntent::Hold => DriveCommand::Brake,
        }
    }

    /// Fraction of the PWM period the motor is powered, zero when braked.
    pub fn duty_fraction(&self, config: &DriveConfig) -> f32 {
        match self {
            DriveCommand::Raise { duty } | DriveCommand::Lower { duty } if config.period > 0 => {
                f32::from(*duty) / f32::from(config.period)
            }
            _ => 0.0,
        }
    }
}

/// Motor driver fed once per tick.
pub trait MotorDriver {
    fn drive(&mut self, command: DriveCommand);
}

/// Floor indicator, updated whenever the car's position is sensed.
pub trait FloorDisplay {
    fn show(&mut self, floor: Floor);
}
