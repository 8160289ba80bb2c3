//! CSV arrival loader.
//!
//! # CSV format
//!
//! One row per passenger request, three columns:
//!
//! ```csv
//! Start Time(s),Start Floor,End Floor
//! 0,1,5
//! 0,1,3
//! 12,7,1
//! ```
//!
//! - The header row is optional: a first row that does not parse as three
//!   integers is taken to be a header and ignored.
//! - Whitespace around fields is trimmed; blank lines are ignored; columns
//!   past the third are ignored.
//! - Rows with fewer than three fields, non-integer values, a negative start
//!   time, or a floor outside `1..=max_floor` are skipped and counted in
//!   [`LoadedArrivals::skipped`].

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use serde::Deserialize;

use lift_core::{FloorId, Tick};

use crate::{ArrivalRecord, RosterResult};

// ── CSV record ────────────────────────────────────────────────────────────────

/// Positional view of the first three columns, before range checks.
#[derive(Deserialize)]
struct RawArrival {
    start_time:  i64,
    start_floor: i64,
    end_floor:   i64,
}

impl RawArrival {
    fn into_record(self, max_floor: u16) -> Option<ArrivalRecord> {
        let start = u64::try_from(self.start_time).ok()?;
        let origin = FloorId(u16::try_from(self.start_floor).ok()?);
        let destination = FloorId(u16::try_from(self.end_floor).ok()?);
        let record = ArrivalRecord::new(Tick(start), origin, destination);
        record.in_building(max_floor).then_some(record)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Result of a lenient load: the accepted records in file order plus the
/// number of rows that were dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadedArrivals {
    pub records: Vec<ArrivalRecord>,
    pub skipped: usize,
}

/// Load arrival records from a CSV file for a building of `max_floor` floors.
pub fn load_arrivals_csv(path: &Path, max_floor: u16) -> RosterResult<LoadedArrivals> {
    let file = std::fs::File::open(path)?;
    let loaded = load_arrivals_reader(file, max_floor)?;
    debug!(
        "loaded {} arrivals from {} ({} rows skipped)",
        loaded.records.len(),
        path.display(),
        loaded.skipped
    );
    Ok(loaded)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded rosters.
pub fn load_arrivals_reader<R: Read>(reader: R, max_floor: u16) -> RosterResult<LoadedArrivals> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut loaded = LoadedArrivals::default();

    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let head: StringRecord = record.iter().take(3).collect();
        let raw = match head.deserialize::<RawArrival>(None) {
            Ok(raw) => raw,
            // Header row.
            Err(_) if row == 0 => continue,
            Err(e) => {
                debug!("row {}: skipping malformed arrival: {e}", row + 1);
                loaded.skipped += 1;
                continue;
            }
        };

        match raw.into_record(max_floor) {
            Some(arrival) => loaded.records.push(arrival),
            None => {
                debug!("row {}: skipping out-of-range arrival", row + 1);
                loaded.skipped += 1;
            }
        }
    }

    Ok(loaded)
}
