//! `lift-core`: foundational types for the `lift` elevator-bank simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`, `ElevatorId`, `FloorId`                |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `BankConfig` (building height, fleet, timings)        |
//! | [`rng`]         | `SimRng` (seeded, reproducible)                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `BankConfig` from a JSON file.            |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BankConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{ElevatorId, FloorId, PassengerId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
