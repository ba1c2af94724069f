//! Base error type.
//!
//! Sub-crates define their own error enums and carry `RdError` as a source
//! where a core type fails to build.

use thiserror::Error;

/// The top-level error type for `rd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RdError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("passenger {0:?} is defined more than once")]
    DuplicatePassenger(String),

    #[error("driver {0:?} has speed 0")]
    ZeroSpeed(String),
}

/// Shorthand result type for all `rd-*` crates.
pub type RdResult<T> = Result<T, RdError>;
