//! The `Simulation` struct and its tick loop.

use log::{debug, error, info};

use lift_core::{BankConfig, SimClock, Tick};
use lift_roster::ArrivalQueue;

use crate::elevator::TickOutput;
use crate::{
    Building, Elevator, PassengerStore, SimError, SimEvent, SimObserver, SimResult, TickSummary,
    TripStats,
};

/// The main simulation runner.
///
/// Each tick:
///
/// 1. **Release**: passengers whose start tick is now join their origin
///    floor's queue.
/// 2. **Elevators**: every elevator advances one step, in ascending id order.
/// 3. **Count**: deliveries are added to the running total.
/// 4. **Stall check**: a tick in which nothing was delivered and no elevator
///    moved or changed state counts toward `stall_limit`.
/// 5. **Advance** the clock.
///
/// The run ends when every passenger is complete.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    pub config: BankConfig,

    pub clock: SimClock,

    /// Floors and their waiting queues.
    pub building: Building,

    /// The bank, indexed by `ElevatorId`.
    pub elevators: Vec<Elevator>,

    /// Every accepted passenger, indexed by `PassengerId`.
    pub passengers: PassengerStore,

    /// Passengers not yet released, keyed by start tick.
    pub arrivals: ArrivalQueue,

    pub(crate) completed:  usize,
    pub(crate) rejected:   usize,
    pub(crate) idle_ticks: u64,
    pub(crate) scratch:    TickOutput,
}

impl Simulation {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every passenger is complete.
    ///
    /// Calls observer hooks at every tick boundary; `on_sim_end` fires even
    /// when the run stalls.  Use [`NoopObserver`][crate::NoopObserver] if you
    /// don't need callbacks.
    ///
    /// # Errors
    ///
    /// [`SimError::Stalled`] when nothing progresses for more than
    /// `stall_limit` ticks.  The simulation is left as it was, so
    /// [`stats`][Self::stats] still reports the partial result.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TripStats> {
        info!(
            "starting: {} passengers ({} already complete, {} rejected), {} elevators, {} ticks/floor",
            self.total(),
            self.completed,
            self.rejected,
            self.elevators.len(),
            self.config.ticks_per_floor
        );

        let outcome = loop {
            if self.is_finished() {
                break Ok(());
            }
            if let Err(e) = self.step(observer) {
                break Err(e);
            }
        };
        observer.on_sim_end(self.clock.current_tick, &self.passengers);
        outcome?;

        let stats = self.stats();
        info!(
            "finished at {}: {} passengers, avg wait {:.2}, avg travel {:.2}",
            self.clock, stats.completed, stats.avg_wait, stats.avg_travel
        );
        Ok(stats)
    }

    /// Run exactly `n` ticks from the current position, even past completion.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Process the current tick and advance the clock by one.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let released = self.release_arrivals(now, observer);
        let (delivered, changed) = self.tick_elevators(now, observer);
        self.completed += delivered;

        let summary = TickSummary {
            released,
            completed: delivered,
            completed_total: self.completed,
            waiting: self.building.waiting_count(),
            riding: self.elevators.iter().map(Elevator::rider_count).sum(),
        };

        if delivered > 0 || changed {
            self.idle_ticks = 0;
        } else {
            self.idle_ticks += 1;
        }

        if self.config.progress_interval_ticks > 0
            && now.0.is_multiple_of(self.config.progress_interval_ticks)
        {
            info!(
                "[{}] {}/{} complete, {} waiting, {} riding",
                self.clock, self.completed, self.total(), summary.waiting, summary.riding
            );
        }

        observer.on_tick_end(now, &summary);

        if self.idle_ticks > self.config.stall_limit {
            error!(
                "[{now}] no progress for {} ticks with {}/{} complete",
                self.idle_ticks,
                self.completed,
                self.total()
            );
            if let Some(next) = self.arrivals.next_tick() {
                error!("[{now}] {} passengers still pending, next arrival at {next}", self.arrivals.len());
            }
            return Err(SimError::Stalled {
                tick:      now,
                completed: self.completed,
                total:     self.total(),
            });
        }

        self.clock.advance();
        Ok(())
    }

    /// Passengers accepted into the run (excludes rejected records).
    pub fn total(&self) -> usize {
        self.passengers.len()
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Records dropped at build time for naming a floor outside the building.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn is_finished(&self) -> bool {
        self.completed >= self.total()
    }

    /// Statistics over the passengers completed so far.
    pub fn stats(&self) -> TripStats {
        TripStats::from_passengers(&self.passengers)
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn release_arrivals<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let Some(released) = self.arrivals.drain_tick(now) else {
            return 0;
        };
        for &passenger in &released {
            let floor = self.passengers.mark_waiting(passenger);
            self.building.floor_mut(floor).enqueue(passenger);

            let event = SimEvent::Released {
                passenger,
                floor,
                destination: self.passengers.get(passenger).destination,
            };
            debug!("[{now}] {event}");
            observer.on_event(now, &event);
        }
        released.len()
    }

    /// Returns the number of deliveries and whether any elevator changed
    /// floor or state.
    fn tick_elevators<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> (usize, bool) {
        let mut delivered = 0;
        let mut changed = false;

        for elevator in &mut self.elevators {
            let before = (elevator.floor(), elevator.state());
            self.scratch.clear();
            elevator.tick(now, &mut self.building, &mut self.passengers, &mut self.scratch);
            changed |= (elevator.floor(), elevator.state()) != before;
            delivered += self.scratch.completed.len();

            for &event in &self.scratch.events {
                let event = SimEvent::Elevator(event);
                debug!("[{now}] {event}");
                observer.on_event(now, &event);
            }
        }

        (delivered, changed)
    }
}
