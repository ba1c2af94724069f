//! Plain data row types written by output backends.

use rd_agent::Fleet;
use rd_event::{Event, EventKind};
use rd_monitor::Monitor;

/// One processed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:       u64,
    pub kind:       EventKind,
    /// Driver name, if the event involves a driver.
    pub driver:     Option<String>,
    /// Passenger name, if the event involves a passenger.
    pub passenger:  Option<String>,
    /// Number of events this one scheduled.
    pub successors: usize,
}

impl EventRow {
    /// Resolve the ids in `event` to names through `fleet`.
    pub fn new(event: &Event, successors: usize, fleet: &Fleet) -> Self {
        Self {
            tick: event.timestamp().0,
            kind: event.kind(),
            driver: event.driver().map(|d| fleet.driver(d).name.clone()),
            passenger: event.passenger().map(|p| fleet.passenger(p).name.clone()),
            successors,
        }
    }
}

/// One summary statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub statistic: &'static str,
    pub value:     f64,
}

impl ReportRow {
    pub const WAIT_TIME: &'static str = "average_passenger_wait_time";
    pub const TOTAL_DISTANCE: &'static str = "average_driver_total_distance";
    pub const TRIP_DISTANCE: &'static str = "average_driver_trip_distance";

    /// Every statistic `monitor` can compute.  Averages over an empty set are
    /// left out rather than reported as zero.
    pub fn collect(monitor: &Monitor) -> Vec<ReportRow> {
        [
            (Self::WAIT_TIME, monitor.average_wait_time()),
            (Self::TOTAL_DISTANCE, monitor.average_total_distance()),
            (Self::TRIP_DISTANCE, monitor.average_trip_distance()),
        ]
        .into_iter()
        .filter_map(|(statistic, value)| value.ok().map(|value| ReportRow { statistic, value }))
        .collect()
    }
}
