//! `lift-sim`: elevator state machine and tick loop for the `lift` simulator.
//!
//! # Tick loop
//!
//! ```text
//! until completed == total:
//!   ① Release  : drain passengers whose start tick is now from the
//!                 ArrivalQueue into their origin floor's FIFO.
//!   ② Elevators: tick each elevator in ascending ElevatorId order:
//!                   STOPPING → count down dwell, then STOPPED
//!                   MOVING   → count down, step one floor, maybe stop/reverse
//!                   STOPPED  → discharge, board, pick next target
//!   ③ Count    : add this tick's deliveries to the running total.
//!   ④ Stall    : abort with SimError::Stalled after stall_limit idle ticks.
//!   ⑤ Advance the clock.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the configurations of a sweep on Rayon's pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::BankConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(BankConfig::default())
//!     .arrivals(records)
//!     .build()?;
//! let stats = sim.run(&mut NoopObserver)?;
//! println!("avg wait {:.2}, avg travel {:.2}", stats.avg_wait, stats.avg_travel);
//! ```

pub mod builder;
pub mod elevator;
pub mod error;
pub mod floor;
pub mod observer;
pub mod passenger;
pub mod sim;
pub mod stats;
pub mod sweep;


pub use builder::SimBuilder;
pub use elevator::{Direction, Elevator, ElevatorEvent, ElevatorState, Motion, TickOutput};
pub use error::{SimError, SimResult};
pub use floor::{Building, Floor};
pub use observer::{NoopObserver, SimEvent, SimObserver, TickSummary};
pub use passenger::{Passenger, PassengerStatus, PassengerStore};
pub use sim::Simulation;
pub use stats::{TripStats, percent_reduction};
pub use sweep::{SweepRun, run_sweep, run_sweep_with};
