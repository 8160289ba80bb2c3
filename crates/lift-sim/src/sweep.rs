//! Comparison sweeps: one roster, several traversal speeds.
//!
//! Every configuration gets its own [`Simulation`]; runs share nothing but
//! the (cloned) roster, so with the `parallel` feature they execute on
//! Rayon's thread pool and still produce the same results as a serial sweep.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use lift_core::{BankConfig, Tick};
use lift_roster::ArrivalRecord;

use crate::{NoopObserver, SimBuilder, SimError, SimObserver, SimResult, TripStats, percent_reduction};

/// Outcome of one configuration in a sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepRun {
    pub ticks_per_floor: u32,
    pub stats:           TripStats,
    /// Clock value when the run ended.
    pub final_tick:      Tick,
    /// `true` when the run hit the stall limit; `stats` is then partial.
    pub stalled:         bool,
}

impl SweepRun {
    /// Percent reduction in (wait, travel) of `self` relative to `baseline`.
    pub fn reduction_vs(&self, baseline: &SweepRun) -> (f64, f64) {
        (
            percent_reduction(baseline.stats.avg_wait, self.stats.avg_wait),
            percent_reduction(baseline.stats.avg_travel, self.stats.avg_travel),
        )
    }
}

/// Run `arrivals` once per entry of `ticks_per_floor`, all other settings
/// taken from `base`.  Results follow the order of `ticks_per_floor`.
pub fn run_sweep(
    base:            &BankConfig,
    ticks_per_floor: &[u32],
    arrivals:        &[ArrivalRecord],
) -> SimResult<Vec<SweepRun>> {
    let runs = run_sweep_with(base, ticks_per_floor, arrivals, |_| NoopObserver)?;
    Ok(runs.into_iter().map(|(run, _)| run).collect())
}

/// Like [`run_sweep`] but attaches a fresh observer to each run, built by
/// `make_observer(ticks_per_floor)`.  Observers are returned with their runs.
///
/// A stall is reported through [`SweepRun::stalled`]; any other error aborts
/// the sweep.
pub fn run_sweep_with<O, F>(
    base:            &BankConfig,
    ticks_per_floor: &[u32],
    arrivals:        &[ArrivalRecord],
    make_observer:   F,
) -> SimResult<Vec<(SweepRun, O)>>
where
    O: SimObserver + Send,
    F: Fn(u32) -> O + Sync,
{
    let run_one = |&tpf: &u32| -> SimResult<(SweepRun, O)> {
        let config = base.clone().with_ticks_per_floor(tpf);
        let mut sim = SimBuilder::new(config).arrivals(arrivals.to_vec()).build()?;
        let mut observer = make_observer(tpf);
        let (stats, stalled) = match sim.run(&mut observer) {
            Ok(stats) => (stats, false),
            Err(SimError::Stalled { .. }) => (sim.stats(), true),
            Err(e) => return Err(e),
        };
        let run = SweepRun {
            ticks_per_floor: tpf,
            stats,
            final_tick: sim.clock.current_tick,
            stalled,
        };
        Ok((run, observer))
    };

    #[cfg(feature = "parallel")]
    let runs = ticks_per_floor.par_iter().map(run_one).collect();
    #[cfg(not(feature = "parallel"))]
    let runs = ticks_per_floor.iter().map(run_one).collect();

    runs
}
