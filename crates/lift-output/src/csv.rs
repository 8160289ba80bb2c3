//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trips.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, TripRow};

const TRIP_HEADER: [&str; 9] = [
    "passenger", "start", "origin", "destination", "boarded", "exited", "wait", "travel", "completed",
];

const SUMMARY_HEADER: [&str; 7] =
    ["tick", "elapsed", "released", "completed", "completed_total", "waiting", "riding"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    trips:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    ///
    /// Headers are written up front so an empty run still yields readable
    /// files.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = open(&dir.join("trips.csv"))?;
        trips.write_record(TRIP_HEADER)?;

        let mut summaries = open(&dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { trips, summaries, finished: false })
    }
}

fn open(path: &Path) -> OutputResult<Writer<File>> {
    Ok(WriterBuilder::new().has_headers(false).from_path(path)?)
}

impl OutputWriter for CsvWriter {
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        for row in rows {
            self.trips.serialize(row)?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
