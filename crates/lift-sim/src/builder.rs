//! Fluent builder for constructing a [`Simulation`].

use log::warn;

use lift_core::{BankConfig, ElevatorId, SimClock};
use lift_roster::{ArrivalQueue, ArrivalRecord};

use crate::elevator::TickOutput;
use crate::{Building, Elevator, PassengerStore, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Example
///
/// ```rust,ignore
/// let loaded = load_arrivals_csv(path, config.floors)?;
/// let mut sim = SimBuilder::new(config)
///     .arrivals(loaded.records)
///     .build()?;
/// let stats = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   BankConfig,
    arrivals: Vec<ArrivalRecord>,
}

impl SimBuilder {
    pub fn new(config: BankConfig) -> Self {
        Self { config, arrivals: Vec::new() }
    }

    /// Replace the arrival roster.  Passenger ids follow record order.
    pub fn arrivals(mut self, records: Vec<ArrivalRecord>) -> Self {
        self.arrivals = records;
        self
    }

    /// Append a single arrival record.
    pub fn arrival(mut self, record: ArrivalRecord) -> Self {
        self.arrivals.push(record);
        self
    }

    /// Validate the configuration and assemble the simulation.
    ///
    /// Records with a floor outside the building are dropped and counted in
    /// [`Simulation::rejected`].  Same-floor records complete immediately at
    /// their start tick and never enter a queue.
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;
        let max_floor = self.config.floors;

        let mut passengers = PassengerStore::new();
        let mut arrivals = ArrivalQueue::new();
        let mut completed = 0usize;
        let mut rejected = 0usize;

        for record in &self.arrivals {
            if !record.in_building(max_floor) {
                warn!(
                    "rejecting arrival at {} from floor {} to {}: building has {max_floor} floors",
                    record.start, record.origin.0, record.destination.0
                );
                rejected += 1;
                continue;
            }
            let id = passengers.push(record).ok_or_else(|| {
                SimError::Config(format!("too many passengers ({})", self.arrivals.len()))
            })?;
            if record.is_same_floor() {
                passengers.complete_in_place(id);
                completed += 1;
            } else {
                arrivals.push(record.start, id);
            }
        }

        let elevators = (0..self.config.elevators)
            .map(|i| Elevator::new(ElevatorId(i), &self.config))
            .collect();

        Ok(Simulation {
            clock: SimClock::new(),
            building: Building::new(max_floor),
            elevators,
            passengers,
            arrivals,
            completed,
            rejected,
            idle_ticks: 0,
            scratch: TickOutput::default(),
            config: self.config,
        })
    }
}
