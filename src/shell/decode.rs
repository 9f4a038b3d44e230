//! Decoding of the priority-encoder addresses wired to the buttons and
//! limit switches, and encoding of the display's BCD lines.

use crate::core::{Direction, Floor, TickInputs};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by address decoding.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown tower button address {0:#05b}")]
    TowerAddress(u8),

    #[error("unknown cabin button address {0:#04b}")]
    CabinAddress(u8),

    #[error("unknown limit switch address {0:#04b}")]
    LimitAddress(u8),
}

/// Decode a 3-bit tower button address into the call it requests.
///
/// | address | call |
/// |---|---|
/// | 7 | floor 1, up |
/// | 6 | floor 2, down |
/// | 5 | floor 2, up |
/// | 4 | floor 3, down |
/// | 3 | floor 3, up |
/// | 2 | floor 4, down |
pub fn tower_call(address: u8) -> Result<(Floor, Direction), DecodeError> {
    let (number, direction) = match address {
        7 => (1, Direction::Up),
        6 => (2, Direction::Down),
        5 => (2, Direction::Up),
        4 => (3, Direction::Down),
        3 => (3, Direction::Up),
        2 => (4, Direction::Down),
        _ => return Err(DecodeError::TowerAddress(address)),
    };
    let floor = Floor::new(number).map_err(|_| DecodeError::TowerAddress(address))?;
    Ok((floor, direction))
}

/// Decode a 2-bit cabin button address; floor = address + 1.
pub fn cabin_selection(address: u8) -> Result<Floor, DecodeError> {
    two_bit_floor(address).ok_or(DecodeError::CabinAddress(address))
}

/// Decode a 2-bit limit switch address; floor = address + 1.
pub fn limit_switch(address: u8) -> Result<Floor, DecodeError> {
    two_bit_floor(address).ok_or(DecodeError::LimitAddress(address))
}

fn two_bit_floor(address: u8) -> Option<Floor> {
    if address > 0b11 {
        return None;
    }
    Floor::new(address + 1).ok()
}

/// The 3-bit BCD code driving the seven-segment decoder.
pub fn display_code(floor: Floor) -> u8 {
    floor.get() & 0b111
}

/// Raw encoder addresses latched in one sampling period.
///
/// `None` means the encoder's enable line was low.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSample {
    pub limit: Option<u8>,
    pub cabin: Option<u8>,
    pub tower: Option<u8>,
}

impl RawSample {
    /// Decode into core inputs, dropping addresses that map to nothing.
    pub fn decode(&self) -> TickInputs {
        TickInputs {
            sensed_position: self.limit.and_then(|a| keep(limit_switch(a))),
            tower_call: self.tower.and_then(|a| keep(tower_call(a))),
            cabin_selection: self.cabin.and_then(|a| keep(cabin_selection(a))),
        }
    }
}

fn keep<T>(decoded: Result<T, DecodeError>) -> Option<T> {
    decoded
        .map_err(|err| log::warn!("dropping input: {err}"))
        .ok()
}
