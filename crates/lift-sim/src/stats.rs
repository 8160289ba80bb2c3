//! Aggregate trip statistics.

use crate::PassengerStore;

/// Average wait and travel over the completed passengers of one run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TripStats {
    pub completed:  usize,
    pub total:      usize,
    /// Mean `boarded - start`, in ticks.  0.0 when nobody completed.
    pub avg_wait:   f64,
    /// Mean `exit - boarded`, in ticks.  0.0 when nobody completed.
    pub avg_travel: f64,
}

impl TripStats {
    pub fn from_passengers(passengers: &PassengerStore) -> Self {
        let mut completed = 0usize;
        let mut wait_sum = 0u64;
        let mut travel_sum = 0u64;
        for p in passengers.iter().filter(|p| p.is_completed()) {
            completed += 1;
            wait_sum += p.wait_ticks().unwrap_or(0);
            travel_sum += p.travel_ticks().unwrap_or(0);
        }

        let mean = |sum: u64| if completed == 0 { 0.0 } else { sum as f64 / completed as f64 };
        Self {
            completed,
            total: passengers.len(),
            avg_wait: mean(wait_sum),
            avg_travel: mean(travel_sum),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }
}

/// Percentage by which `improved` undercuts `baseline`.
///
/// Negative when `improved` is worse; 0.0 when the baseline is zero.
pub fn percent_reduction(baseline: f64, improved: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        100.0 * (baseline - improved) / baseline
    }
}
