//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `event_trace.csv`
//! - `report.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, ReportRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    report:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("event_trace.csv"))?;
        events.write_record(["tick", "kind", "driver", "passenger", "successors"])?;

        let mut report = Writer::from_path(dir.join("report.csv"))?;
        report.write_record(["statistic", "value"])?;

        Ok(Self {
            events,
            report,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record([
            row.tick.to_string().as_str(),
            row.kind.to_string().as_str(),
            row.driver.as_deref().unwrap_or(""),
            row.passenger.as_deref().unwrap_or(""),
            row.successors.to_string().as_str(),
        ])?;
        Ok(())
    }

    fn write_report(&mut self, rows: &[ReportRow]) -> OutputResult<()> {
        for row in rows {
            self.report.write_record([row.statistic, row.value.to_string().as_str()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.report.flush()?;
        Ok(())
    }
}
