//! Simulation observer trait for progress reporting and data collection.

use std::fmt;

use lift_core::{FloorId, PassengerId, Tick};

use crate::{ElevatorEvent, PassengerStore};

/// Something that happened during a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimEvent {
    /// A passenger's start tick came up and it joined its origin floor's queue.
    Released {
        passenger:   PassengerId,
        floor:       FloorId,
        destination: FloorId,
    },
    Elevator(ElevatorEvent),
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Released { passenger, floor, destination } => write!(
                f,
                "passenger {} waiting at floor {} -> {}",
                passenger.0, floor.0, destination.0
            ),
            SimEvent::Elevator(event) => event.fmt(f),
        }
    }
}

/// Counts reported at the end of every tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Passengers released into floor queues this tick.
    pub released:        usize,
    /// Passengers delivered this tick.
    pub completed:       usize,
    pub completed_total: usize,
    /// Passengers queued on floors after this tick.
    pub waiting:         usize,
    /// Passengers aboard elevators after this tick.
    pub riding:          usize,
}

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(usize);
///
/// impl SimObserver for Deliveries {
///     fn on_event(&mut self, _tick: Tick, event: &SimEvent) {
///         if let SimEvent::Elevator(ElevatorEvent::Exited { .. }) = event {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every release and every elevator transition, in the order
    /// they happen.
    fn on_event(&mut self, _tick: Tick, _event: &SimEvent) {}

    /// Called at the end of each tick, before the clock advances.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called once when the run ends, whether it completed or stalled.
    ///
    /// Provides read-only access to every passenger so that output writers
    /// can record per-trip results.
    fn on_sim_end(&mut self, _final_tick: Tick, _passengers: &PassengerStore) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
