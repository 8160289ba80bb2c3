//! Plain data row types written by output backends.

use serde::Serialize;

use lift_core::{SimClock, Tick};
use lift_sim::{Passenger, TickSummary};

/// One passenger's trip.  Timestamps are empty for passengers a stalled run
/// never picked up or delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripRow {
    pub passenger:   u32,
    pub start:       u64,
    pub origin:      u16,
    pub destination: u16,
    pub boarded:     Option<u64>,
    pub exited:      Option<u64>,
    pub wait:        Option<u64>,
    pub travel:      Option<u64>,
    pub completed:   bool,
}

impl From<&Passenger> for TripRow {
    fn from(p: &Passenger) -> Self {
        Self {
            passenger:   p.id.0,
            start:       p.start.0,
            origin:      p.origin.0,
            destination: p.destination.0,
            boarded:     p.boarded.map(|t| t.0),
            exited:      p.exited.map(|t| t.0),
            wait:        p.wait_ticks(),
            travel:      p.travel_ticks(),
            completed:   p.is_completed(),
        }
    }
}

/// Counts for one simulation tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickSummaryRow {
    pub tick:            u64,
    /// Simulated time as `HH:MM:SS`, one tick per second.
    pub elapsed:         String,
    pub released:        u64,
    pub completed:       u64,
    pub completed_total: u64,
    pub waiting:         u64,
    pub riding:          u64,
}

impl TickSummaryRow {
    pub fn new(tick: Tick, summary: &TickSummary) -> Self {
        let (h, m, s) = SimClock { current_tick: tick }.elapsed_hms();
        Self {
            tick:            tick.0,
            elapsed:         format!("{h:02}:{m:02}:{s:02}"),
            released:        summary.released as u64,
            completed:       summary.completed as u64,
            completed_total: summary.completed_total as u64,
            waiting:         summary.waiting as u64,
            riding:          summary.riding as u64,
        }
    }
}
