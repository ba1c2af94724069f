use thiserror::Error;

/// Raised when a statistic would average over an empty set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorError {
    #[error("no passenger has finished waiting (picked up or cancelled)")]
    NoResolvedPassengers,

    #[error("no driver activity has been recorded")]
    NoDrivers,
}

pub type MonitorResult<T> = Result<T, MonitorError>;
