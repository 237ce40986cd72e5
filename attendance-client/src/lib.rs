//! Attendance Client - HTTP gateway for the membership attendance API
//!
//! Provides the remote calls the desk controller depends on: roster
//! fetch, batch submission and the daily report document URL.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;

pub use config::ClientConfig;
pub use error::{GatewayError, GatewayResult};
pub use gateway::RemoteGateway;
pub use http::HttpGateway;

// Re-export shared DTOs for convenience
pub use shared::client::{RosterResponse, SubmitOutcome, SubmitRequest, SubmitResponse};
