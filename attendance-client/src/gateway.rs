//! Remote gateway trait
//!
//! The seam between the desk controller and the network. The controller
//! only ever talks to this trait, so its state rules can be exercised
//! against a scripted implementation in tests.

use crate::error::GatewayResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::client::SubmitOutcome;
use shared::{AttendanceEntry, Member};

/// Remote API surface used by the desk controller
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Fetch the member roster, optionally filtered by a search term.
    ///
    /// On failure the caller must keep its current roster and surface
    /// the error to the operator.
    async fn fetch_roster(&self, search: Option<&str>) -> GatewayResult<Vec<Member>>;

    /// Submit a batch of attendance entries for the given date.
    ///
    /// On any failure the caller must leave its pending entries
    /// untouched so the operator can retry without re-entering data.
    async fn submit_batch(
        &self,
        date: NaiveDate,
        entries: &[AttendanceEntry],
    ) -> GatewayResult<SubmitOutcome>;

    /// URL of the daily report document for the given date.
    ///
    /// Fire-and-forget side channel; opened as a standalone view.
    fn daily_report_url(&self, date: NaiveDate) -> String;
}
