use rd_core::Tick;
use rd_monitor::MonitorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("event at {scheduled} scheduled while the clock is at {now}")]
    EventInPast { now: Tick, scheduled: Tick },

    #[error("event {event} refers to an entity missing from the fleet")]
    UnknownEntity { event: String },

    #[error("report unavailable: {0}")]
    Report(#[from] MonitorError),
}

pub type SimResult<T> = Result<T, SimError>;
