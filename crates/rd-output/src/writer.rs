//! The `OutputWriter` trait implemented by backend writers.

use crate::{EventRow, OutputResult, ReportRow};

/// Sink for the event trace and the final report.
///
/// Called from [`SimOutputObserver`][crate::SimOutputObserver], which stores
/// errors instead of propagating them.
pub trait OutputWriter {
    /// Write one processed event.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write the summary statistics.
    fn write_report(&mut self, rows: &[ReportRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
