//! Client-related types shared between the gateway and the desk controller
//!
//! Request/response payloads for the attendance API.

use crate::models::attendance::AttendanceEntry;
use crate::models::member::Member;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Roster API DTOs
// =============================================================================

/// Roster list payload
///
/// The API serves either a paginated `{"results": [...]}` envelope or a
/// bare array, depending on the view configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RosterResponse {
    Paginated { results: Vec<Member> },
    Bare(Vec<Member>),
}

impl RosterResponse {
    /// Unwrap into the member list regardless of envelope shape
    pub fn into_members(self) -> Vec<Member> {
        match self {
            Self::Paginated { results } => results,
            Self::Bare(members) => members,
        }
    }
}

// =============================================================================
// Submit API DTOs
// =============================================================================

/// Attendance batch submission request
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRequest {
    /// Attendance date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

/// Raw submit endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    #[serde(default)]
    pub submitted_count: u32,
    #[serde(default)]
    pub total_received: Decimal,
    #[serde(default)]
    pub message: Option<String>,
}

/// Business-level result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmitOutcome {
    pub submitted_count: u32,
    pub total_received: Decimal,
}
