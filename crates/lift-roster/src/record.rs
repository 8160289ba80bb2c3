//! One upstream passenger request.

use lift_core::{FloorId, Tick};

/// A transport request as supplied by the arrival loader: the passenger shows
/// up on `origin` at tick `start` and wants to go to `destination`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrivalRecord {
    pub start:       Tick,
    pub origin:      FloorId,
    pub destination: FloorId,
}

impl ArrivalRecord {
    pub fn new(start: Tick, origin: FloorId, destination: FloorId) -> Self {
        Self { start, origin, destination }
    }

    /// `true` when no transport is needed.
    #[inline]
    pub fn is_same_floor(&self) -> bool {
        self.origin == self.destination
    }

    /// `true` if both floors exist in a building of `max_floor` floors.
    #[inline]
    pub fn in_building(&self, max_floor: u16) -> bool {
        self.origin.in_building(max_floor) && self.destination.in_building(max_floor)
    }
}
