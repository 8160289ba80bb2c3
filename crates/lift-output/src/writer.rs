//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, TickSummaryRow, TripRow};

/// A sink for per-passenger trip rows and periodic tick summaries.
///
/// Errors surfaced while the simulation is running are stored by
/// [`SimOutputObserver`][crate::SimOutputObserver] and retrieved with
/// `take_error`.
pub trait OutputWriter {
    /// Write a batch of trip rows.
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
