//! Simulated Shaft
//!
//! This example drives the controller against a simulated shaft that moves
//! the car one floor per tick while the motor is powered.
//!
//! Key concepts:
//! - Homing to the bottom floor at power-on
//! - A tower call served end to end before the next is accepted
//! - Raw encoder addresses decoded by the shell
//!
//! Run with: RUST_LOG=info cargo run --example simulate

use elevator_core::config::ElevatorConfig;
use elevator_core::core::{ElevatorState, Floor};
use elevator_core::shell::{decode, Controller, DriveCommand, FloorDisplay, MotorDriver, RawSample};
use std::thread;

#[derive(Default)]
struct Motor {
    last: Option<DriveCommand>,
}

impl MotorDriver for Motor {
    fn drive(&mut self, command: DriveCommand) {
        if self.last != Some(command) {
            println!("  motor: {command:?}");
        }
        self.last = Some(command);
    }
}

struct SevenSegment;

impl FloorDisplay for SevenSegment {
    fn show(&mut self, floor: Floor) {
        println!("  display: {floor} (code {:03b})", decode::display_code(floor));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Elevator Simulation ===\n");

    let config = ElevatorConfig::from_json(r#"{ "tick_interval_ms": 50 }"#)?;
    let mut controller = Controller::new(&config, Motor::default(), SevenSegment);
    let mut position = Floor::new(3)?;

    // (tick, tower address, cabin address) button presses
    let script: [(u64, Option<u8>, Option<u8>); 3] = [
        (4, Some(2), None), // floor 4, down
        (9, None, Some(1)), // selects floor 2
        (10, Some(7), None), // floor 1, up: rejected while busy
    ];

    for tick in 1..=16 {
        position = match controller.motor().last {
            Some(DriveCommand::Raise { .. }) => position.above().unwrap_or(position),
            Some(DriveCommand::Lower { .. }) => position.below().unwrap_or(position),
            _ => position,
        };

        let mut sample = RawSample {
            limit: Some(position.get() - 1),
            ..RawSample::default()
        };
        if let Some((_, tower, cabin)) = script.iter().find(|(t, _, _)| *t == tick) {
            sample.tower = *tower;
            sample.cabin = *cabin;
        }

        let out = controller.sample(sample);
        println!(
            "tick {tick:>2}: {:<24} intent {:?}",
            controller.car().state().to_string(),
            out.motor_intent
        );
        thread::sleep(config.tick_interval());
    }

    println!("\nState path:");
    for transition in controller.history().transitions() {
        println!("  tick {:>2}: {} -> {}", transition.tick, transition.from, transition.to);
    }
    assert_eq!(controller.car().state(), ElevatorState::Idle);

    println!("\n=== Example Complete ===");
    Ok(())
}
