//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_sim::{PassengerStore, SimObserver, TickSummary};

use crate::row::{TickSummaryRow, TripRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes periodic tick summaries and, when the run
/// ends, one trip row per passenger.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:           W,
    summary_interval: u64,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` that records a tick summary
    /// every `summary_interval` ticks (0 disables summaries).
    pub fn new(writer: W, summary_interval: u64) -> Self {
        Self { writer, summary_interval, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        if self.summary_interval == 0 || !tick.0.is_multiple_of(self.summary_interval) {
            return;
        }
        let result = self.writer.write_tick_summary(&TickSummaryRow::new(tick, summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, passengers: &PassengerStore) {
        let rows: Vec<TripRow> = passengers.iter().map(TripRow::from).collect();
        if !rows.is_empty() {
            let result = self.writer.write_trips(&rows);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
