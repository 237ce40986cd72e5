//! Desk error types

use attendance_client::GatewayError;
use thiserror::Error;

/// Desk controller error type
#[derive(Debug, Error)]
pub enum DeskError {
    /// Submit requested with no pending entries
    #[error("no pending attendance to submit")]
    EmptyBatch,

    /// A submission is already in flight
    #[error("a submission is already in progress")]
    SubmitInFlight,

    /// Remote call failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Result type for desk operations
pub type DeskResult<T> = Result<T, DeskError>;
