//! `lift-roster`: passenger arrival records, arrival queue, and CSV loading.
//!
//! # Crate layout
//!
//! | Module            | Contents                                               |
//! |-------------------|--------------------------------------------------------|
//! | [`record`]        | `ArrivalRecord`                                        |
//! | [`arrival_queue`] | `ArrivalQueue` (`BTreeMap<Tick, Vec<PassengerId>>`)    |
//! | [`loader`]        | `load_arrivals_csv`, `load_arrivals_reader`, `LoadedArrivals` |
//! | [`generate`]      | `SyntheticRoster`: seeded arrival generator           |
//! | [`error`]         | `RosterError`, `RosterResult<T>`                       |
//!
//! The loader is lenient by contract: rows that are malformed or name a floor
//! outside the building are skipped and counted, never reported as errors.
//! Only I/O and CSV framing failures surface as `RosterError`.

pub mod arrival_queue;
pub mod error;
pub mod generate;
pub mod loader;
pub mod record;


pub use arrival_queue::ArrivalQueue;
pub use error::{RosterError, RosterResult};
pub use generate::SyntheticRoster;
pub use loader::{LoadedArrivals, load_arrivals_csv, load_arrivals_reader};
pub use record::ArrivalRecord;
