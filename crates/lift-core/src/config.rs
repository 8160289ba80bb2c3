//! Elevator-bank configuration.
//!
//! Everything the simulation core treats as a constant lives here as an
//! explicit value, so two configurations (e.g. 10 s vs 5 s per floor) can run
//! side by side in the same process.

use crate::{CoreError, CoreResult};

/// Top-level simulation configuration.
///
/// Typically built from [`BankConfig::default`] and adjusted with the `with_*`
/// setters, or loaded from a JSON file by the application (`serde` feature).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BankConfig {
    /// Building height.  Floors are numbered `1..=floors`.
    pub floors: u16,

    /// Number of elevators in the bank.
    pub elevators: u16,

    /// Maximum riders per elevator.
    pub capacity: usize,

    /// Ticks needed to travel one floor.
    pub ticks_per_floor: u32,

    /// Ticks an elevator spends in STOPPING before it can board/discharge.
    pub dwell_ticks: u32,

    /// Consecutive no-progress ticks tolerated before a run is declared stalled.
    pub stall_limit: u64,

    /// Log a progress line every N ticks.  0 disables progress logging.
    pub progress_interval_ticks: u64,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            floors:                  100,
            elevators:               4,
            capacity:                8,
            ticks_per_floor:         10,
            dwell_ticks:             2,
            stall_limit:             60_000,
            progress_interval_ticks: 600,
        }
    }
}

impl BankConfig {
    pub fn with_floors(mut self, floors: u16) -> Self {
        self.floors = floors;
        self
    }

    pub fn with_elevators(mut self, elevators: u16) -> Self {
        self.elevators = elevators;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_ticks_per_floor(mut self, ticks: u32) -> Self {
        self.ticks_per_floor = ticks;
        self
    }

    pub fn with_dwell_ticks(mut self, ticks: u32) -> Self {
        self.dwell_ticks = ticks;
        self
    }

    pub fn with_stall_limit(mut self, ticks: u64) -> Self {
        self.stall_limit = ticks;
        self
    }

    pub fn with_progress_interval(mut self, ticks: u64) -> Self {
        self.progress_interval_ticks = ticks;
        self
    }

    /// Reject configurations the tick loop cannot run.
    ///
    /// A zero dwell is allowed (the elevator goes straight to STOPPED on the
    /// next tick); everything else must be at least one.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floors == 0 {
            return Err(CoreError::Config("building must have at least one floor".into()));
        }
        if self.elevators == 0 {
            return Err(CoreError::Config("bank must have at least one elevator".into()));
        }
        if self.capacity == 0 {
            return Err(CoreError::Config("elevator capacity must be > 0".into()));
        }
        if self.ticks_per_floor == 0 {
            return Err(CoreError::Config("ticks_per_floor must be > 0".into()));
        }
        if self.stall_limit == 0 {
            return Err(CoreError::Config("stall_limit must be > 0".into()));
        }
        Ok(())
    }
}
