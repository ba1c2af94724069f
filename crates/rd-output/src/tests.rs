//! Integration tests for rd-output.

use std::io::Cursor;
use std::path::Path;

use tempfile::TempDir;

use rd_event::{EventKind, load_events_reader};
use rd_monitor::{Category, Description, Monitor};
use rd_core::{Location, Tick};
use rd_sim::{SimBuilder, SimObserver};

use crate::csv::CsvWriter;
use crate::row::{EventRow, ReportRow};
use crate::writer::OutputWriter;
use crate::SimOutputObserver;

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records()
        .map(|r| r.unwrap().iter().map(str::to_owned).collect())
        .collect()
}

fn event_row(tick: u64) -> EventRow {
    EventRow {
        tick,
        kind:       EventKind::Pickup,
        driver:     Some("D1".into()),
        passenger:  Some("P1".into()),
        successors: 1,
    }
}

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("event_trace.csv").exists());
        assert!(dir.path().join("report.csv").exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let mut w = CsvWriter::new(&nested).unwrap();
        w.finish().unwrap();
        assert!(nested.join("event_trace.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("event_trace.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "kind", "driver", "passenger", "successors"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("report.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["statistic", "value"]);
    }

    #[test]
    fn event_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&event_row(4)).unwrap();
        w.write_event(&EventRow {
            tick:       6,
            kind:       EventKind::DriverRequest,
            driver:     Some("D1".into()),
            passenger:  None,
            successors: 0,
        })
        .unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("event_trace.csv"));
        assert_eq!(rows, vec![
            vec!["4", "Pickup", "D1", "P1", "1"],
            vec!["6", "DriverRequest", "D1", "", "0"],
        ]);
    }

    #[test]
    fn report_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_report(&[
            ReportRow { statistic: ReportRow::WAIT_TIME, value: 3.0 },
            ReportRow { statistic: ReportRow::TRIP_DISTANCE, value: 2.5 },
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("report.csv"));
        assert_eq!(rows, vec![
            vec!["average_passenger_wait_time", "3"],
            vec!["average_driver_trip_distance", "2.5"],
        ]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod row_tests {
    use super::*;

    #[test]
    fn empty_monitor_has_no_report_rows() {
        assert!(ReportRow::collect(&Monitor::new()).is_empty());
    }

    #[test]
    fn statistics_over_empty_sets_are_omitted() {
        let mut m = Monitor::new();
        let at = Location::new(0, 0);
        m.notify(Tick(0), Category::Passenger, Description::Request, "P1", at);
        m.notify(Tick(2), Category::Passenger, Description::Cancel, "P1", at);

        let rows = ReportRow::collect(&m);
        assert_eq!(rows, vec![ReportRow { statistic: ReportRow::WAIT_TIME, value: 2.0 }]);
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;

    const MATCHED_RIDE: &str = "\
0 DriverRequest D1 0,0 1
1 PassengerRequest P1 0,3 0,5 10
";

    #[test]
    fn full_run_writes_trace_and_report() {
        let dir = tmp();
        let scenario = load_events_reader(Cursor::new(MATCHED_RIDE)).unwrap();
        let mut sim = SimBuilder::new(scenario).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let trace = read_rows(&dir.path().join("event_trace.csv"));
        assert_eq!(trace, vec![
            vec!["0", "DriverRequest", "D1", "", "0"],
            vec!["1", "PassengerRequest", "", "P1", "2"],
            vec!["4", "Pickup", "D1", "P1", "1"],
            vec!["6", "Dropoff", "D1", "P1", "1"],
            vec!["6", "DriverRequest", "D1", "", "0"],
            vec!["11", "Cancellation", "", "P1", "0"],
        ]);

        let report = read_rows(&dir.path().join("report.csv"));
        assert_eq!(report, vec![
            vec!["average_passenger_wait_time", "3"],
            vec!["average_driver_total_distance", "5"],
            vec!["average_driver_trip_distance", "2"],
        ]);
    }

    /// Writer that fails every call after the first `ok` events.
    struct Failing {
        ok:       usize,
        finished: usize,
    }

    impl OutputWriter for Failing {
        fn write_event(&mut self, _row: &EventRow) -> crate::OutputResult<()> {
            if self.ok == 0 {
                return Err(std::io::Error::other("write failed").into());
            }
            self.ok -= 1;
            Ok(())
        }

        fn write_report(&mut self, _rows: &[ReportRow]) -> crate::OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> crate::OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept_and_run_continues() {
        let scenario = load_events_reader(Cursor::new(MATCHED_RIDE)).unwrap();
        let mut sim = SimBuilder::new(scenario).build().unwrap();
        let mut obs = SimOutputObserver::new(Failing { ok: 2, finished: 0 });
        sim.run(&mut obs).unwrap();

        assert_eq!(sim.processed(), 6);
        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("write failed"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().finished, 1);
    }

    #[test]
    fn sim_end_without_events_still_finishes() {
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        obs.on_sim_end(Tick::ZERO, &Monitor::new());
        assert!(obs.take_error().is_none());
        assert!(read_rows(&dir.path().join("report.csv")).is_empty());
    }
}
