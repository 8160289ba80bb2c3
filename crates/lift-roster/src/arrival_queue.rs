//! `ArrivalQueue`: sparse time-indexed multi-map of pending arrivals.
//!
//! Each tick the simulation drains only the passengers that appear at that
//! tick, so release costs O(log W + k) where W is the number of distinct
//! pending arrival ticks and k the number released.  Passengers queued for
//! the same tick come out in insertion order.

use std::collections::BTreeMap;

use lift_core::{PassengerId, Tick};

/// Maps simulation ticks → passengers that arrive at that tick.
#[derive(Default, Debug)]
pub struct ArrivalQueue {
    inner: BTreeMap<Tick, Vec<PassengerId>>,
    /// Cached total passenger count for O(1) `len()`.
    total: usize,
}

impl ArrivalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `passenger` to arrive at `tick`.
    pub fn push(&mut self, tick: Tick, passenger: PassengerId) {
        self.inner.entry(tick).or_default().push(passenger);
        self.total += 1;
    }

    /// Remove and return all passengers arriving at exactly `tick`.
    ///
    /// Returns `None` if nobody arrives then (the common case; avoids
    /// allocation).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<PassengerId>> {
        let arrivals = self.inner.remove(&tick)?;
        self.total -= arrivals.len();
        Some(arrivals)
    }

    /// The earliest tick with at least one pending arrival.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending arrivals across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
