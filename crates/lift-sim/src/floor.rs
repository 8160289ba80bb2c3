//! Floors and the building that owns them.

use std::collections::VecDeque;

use lift_core::{FloorId, PassengerId};

/// A waiting area: a FIFO queue of passengers awaiting pickup.  Unbounded.
#[derive(Debug, Clone)]
pub struct Floor {
    number:  FloorId,
    waiting: VecDeque<PassengerId>,
}

impl Floor {
    pub fn new(number: FloorId) -> Self {
        Self { number, waiting: VecDeque::new() }
    }

    pub fn number(&self) -> FloorId {
        self.number
    }

    /// Append a passenger at the tail of the queue.
    pub fn enqueue(&mut self, passenger: PassengerId) {
        self.waiting.push_back(passenger);
    }

    /// Take the passenger at the head of the queue.
    pub fn pop_front(&mut self) -> Option<PassengerId> {
        self.waiting.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    /// Waiting passengers, head first.
    pub fn waiting(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.waiting.iter().copied()
    }
}

/// All floors of the building, numbered `1..=max_floor`.
#[derive(Debug, Clone)]
pub struct Building {
    floors: Vec<Floor>,
}

impl Building {
    pub fn new(max_floor: u16) -> Self {
        Self {
            floors: (1..=max_floor).map(|n| Floor::new(FloorId(n))).collect(),
        }
    }

    pub fn max_floor(&self) -> u16 {
        self.floors.len() as u16
    }

    /// # Panics
    /// Panics if `id` is outside `1..=max_floor`.
    #[inline]
    pub fn floor(&self, id: FloorId) -> &Floor {
        &self.floors[id.index() - 1]
    }

    /// # Panics
    /// Panics if `id` is outside `1..=max_floor`.
    #[inline]
    pub fn floor_mut(&mut self, id: FloorId) -> &mut Floor {
        &mut self.floors[id.index() - 1]
    }

    /// Floors in ascending order.
    pub fn floors(&self) -> impl Iterator<Item = &Floor> + '_ {
        self.floors.iter()
    }

    /// Total passengers waiting across all floors.
    pub fn waiting_count(&self) -> usize {
        self.floors.iter().map(Floor::len).sum()
    }

    /// The closest floor to `from` with at least one waiting passenger.
    ///
    /// Ties go to the lower floor: the scan is ascending and only a strictly
    /// shorter distance replaces the current best.
    pub fn nearest_waiting(&self, from: FloorId) -> Option<FloorId> {
        let mut best: Option<(u16, FloorId)> = None;
        for floor in self.floors.iter().filter(|f| !f.is_empty()) {
            let dist = floor.number.distance(from);
            if best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, floor.number));
            }
        }
        best.map(|(_, id)| id)
    }
}
