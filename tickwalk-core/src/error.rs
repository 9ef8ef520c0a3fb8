//! Error type shared by every component in the core crate.

use thiserror::Error;

/// Errors raised by the price source, strategies, brokers, and the driver.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A caller-supplied value is outside the accepted domain
    /// (unknown side/action string, zero window, bad generator parameters).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A strategy produced a signal vector that is not aligned with its input.
    #[error("signal length mismatch: expected {expected} signals, got {actual}")]
    SignalLength { expected: usize, actual: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unparseable timestamp '{0}'")]
    Timestamp(String),
}

impl CoreError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
