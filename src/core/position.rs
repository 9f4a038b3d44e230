//! Position tracker.

use super::car::Car;
use super::floor::Floor;
use super::intent::MotorIntent;

impl Car {
    /// Record a position-sensor reading.
    ///
    /// Readings are ground truth and always accepted. Reaching the top or
    /// bottom floor returns `Some(MotorIntent::Hold)`: the overtravel stop,
    /// which holds regardless of what the transition table commands.
    pub fn update_position(&mut self, floor: Floor) -> Option<MotorIntent> {
        if self.current_floor != Some(floor) {
            log::debug!("car sensed at floor {floor}");
        }
        self.current_floor = Some(floor);
        floor.is_terminal().then_some(MotorIntent::Hold)
    }
}
