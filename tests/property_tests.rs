//! Property-based tests for the elevator control core.
//!
//! These tests use proptest to verify the car's guarantees hold across
//! many randomly generated event sequences.

use elevator_core::core::{Car, Direction, ElevatorState, Floor, MotorIntent, State, TickInputs};
use proptest::option;
use proptest::prelude::*;

fn arbitrary_floor() -> impl Strategy<Value = Floor> {
    (1u8..=4).prop_map(|n| Floor::new(n).unwrap())
}

fn arbitrary_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Up), Just(Direction::Down)]
}

prop_compose! {
    fn arbitrary_inputs()(
        sensed_position in option::of(arbitrary_floor()),
        tower_call in option::of((arbitrary_floor(), arbitrary_direction())),
        cabin_selection in option::of(arbitrary_floor()),
    ) -> TickInputs {
        TickInputs { sensed_position, tower_call, cabin_selection }
    }
}

fn homed_car() -> Car {
    let mut car = Car::new();
    car.tick(TickInputs::position(Floor::BOTTOM));
    car
}

fn run(car: &mut Car, ticks: &[TickInputs]) {
    for inputs in ticks {
        car.tick(*inputs);
    }
}

/// Position readings walking one floor at a time from `from` to `to`, excluding `from`.
fn walk(from: Floor, to: Floor) -> Vec<Floor> {
    let mut path = Vec::new();
    let mut at = from;
    while at != to {
        at = if to > at { at.above() } else { at.below() }.unwrap();
        path.push(at);
    }
    path
}

proptest! {
    #[test]
    fn invariants_hold_after_every_tick(
        ticks in prop::collection::vec(arbitrary_inputs(), 0..80)
    ) {
        let mut car = Car::new();
        for inputs in ticks {
            car.tick(inputs);
            prop_assert_eq!(car.check_invariants(), Ok(()));
            prop_assert!(!(car.pending_call().is_some() && car.pending_destination().is_some()));
        }
    }

    #[test]
    fn busy_car_never_changes_pending_call(
        ticks in prop::collection::vec(arbitrary_inputs(), 0..60),
        call_floor in arbitrary_floor(),
        call_direction in arbitrary_direction(),
    ) {
        let mut car = Car::new();
        for inputs in ticks {
            car.tick(inputs);
            if car.state() != ElevatorState::Idle {
                let before = car.clone();
                prop_assert!(!car.accept_call(call_floor, call_direction));
                prop_assert_eq!(&car, &before);
            }
        }
    }

    #[test]
    fn accepted_destinations_extend_the_call_direction(
        ticks in prop::collection::vec(arbitrary_inputs(), 0..80)
    ) {
        let mut car = Car::new();
        for inputs in ticks {
            let call = (car.state() == ElevatorState::AwaitingSelection)
                .then(|| car.pending_call())
                .flatten();
            car.tick(inputs);

            if let (Some(call), Some(destination)) = (call, car.pending_destination()) {
                let current = car.current_floor().unwrap();
                prop_assert!(call.direction.extends(current, destination));
                prop_assert_eq!(
                    car.state().travel(),
                    Some(call.direction)
                );
            }
        }
    }

    #[test]
    fn inconsistent_selection_leaves_car_unchanged(
        call_floor in arbitrary_floor(),
        call_direction in arbitrary_direction(),
        selection in arbitrary_floor(),
    ) {
        let mut car = homed_car();
        run(&mut car, &[TickInputs::call(call_floor, call_direction)]);
        for f in walk(Floor::BOTTOM, call_floor) {
            car.tick(TickInputs::position(f));
        }
        prop_assume!(car.state() == ElevatorState::AwaitingSelection);
        prop_assume!(!call_direction.extends(call_floor, selection));

        let before = car.clone();
        prop_assert!(!car.select_destination(selection));
        prop_assert_eq!(car, before);
    }

    #[test]
    fn trip_converges_in_floor_distance(
        call_floor in arbitrary_floor(),
        destination in arbitrary_floor(),
    ) {
        let direction = if call_floor == Floor::TOP { Direction::Down } else { Direction::Up };
        prop_assume!(direction.extends(call_floor, destination));

        let mut car = homed_car();
        car.tick(TickInputs::call(call_floor, direction));

        let pickup = walk(Floor::BOTTOM, call_floor);
        for (i, f) in pickup.iter().enumerate() {
            prop_assert_ne!(car.state(), ElevatorState::AwaitingSelection);
            let out = car.tick(TickInputs::position(*f));
            if i + 1 < pickup.len() {
                prop_assert_eq!(out.motor_intent, MotorIntent::Up);
            }
        }
        prop_assert_eq!(car.state(), ElevatorState::AwaitingSelection);
        prop_assert_eq!(pickup.len() as u8, Floor::BOTTOM.distance(call_floor));

        prop_assert!(car.select_destination(destination));
        let delivery = walk(call_floor, destination);
        for f in &delivery {
            prop_assert!(car.state().holds_destination());
            car.tick(TickInputs::position(*f));
        }
        prop_assert_eq!(car.state(), ElevatorState::Idle);
        prop_assert_eq!(delivery.len() as u8, call_floor.distance(destination));
        prop_assert!(car.pending_call().is_none());
        prop_assert!(car.pending_destination().is_none());
    }

    #[test]
    fn resting_states_hold_idempotently(
        ticks in prop::collection::vec(arbitrary_inputs(), 0..40),
        repeats in 1usize..20,
    ) {
        let mut car = homed_car();
        run(&mut car, &ticks);

        if car.state().is_resting() {
            let before = car.clone();
            for _ in 0..repeats {
                let out = car.tick(TickInputs::none());
                prop_assert_eq!(out.motor_intent, MotorIntent::Hold);
                prop_assert_eq!(&car, &before);
            }
        }
    }

    #[test]
    fn intent_never_drives_past_the_shaft_ends(
        ticks in prop::collection::vec(arbitrary_inputs(), 0..80)
    ) {
        let mut car = Car::new();
        for inputs in ticks {
            let out = car.tick(inputs);
            match car.current_floor() {
                Some(f) if f == Floor::TOP => prop_assert_ne!(out.motor_intent, MotorIntent::Up),
                Some(f) if f == Floor::BOTTOM => prop_assert_ne!(out.motor_intent, MotorIntent::Down),
                _ => {}
            }
        }
    }

    #[test]
    fn resolve_is_antisymmetric(a in arbitrary_floor(), b in arbitrary_floor()) {
        let forward = MotorIntent::resolve(a, b);
        let backward = MotorIntent::resolve(b, a);
        match forward {
            MotorIntent::Hold => prop_assert_eq!(backward, MotorIntent::Hold),
            MotorIntent::Up => prop_assert_eq!(backward, MotorIntent::Down),
            MotorIntent::Down => prop_assert_eq!(backward, MotorIntent::Up),
        }
    }

    #[test]
    fn display_tracks_every_reading(
        ticks in prop::collection::vec(arbitrary_inputs(), 0..40)
    ) {
        let mut car = Car::new();
        for inputs in ticks {
            let out = car.tick(inputs);
            prop_assert_eq!(out.display_floor, inputs.sensed_position);
        }
    }
}
