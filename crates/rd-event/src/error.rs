use rd_core::RdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("event file line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("event file line {line}: {source}")]
    Core {
        line:   usize,
        #[source]
        source: RdError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EventResult<T> = Result<T, EventError>;
