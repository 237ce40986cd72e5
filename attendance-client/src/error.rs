//! Gateway error types

use thiserror::Error;

/// Gateway error type
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport or HTTP-level failure (includes non-2xx statuses)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),

    /// Well-formed response signalling a business-rule failure
    #[error("server rejected submission: {0}")]
    ServerRejected(String),
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
