//! Desk controller
//!
//! Async orchestration between the session state and the remote
//! gateway: roster refresh with stale-response protection, the submit
//! flow, and synchronous pass-throughs for operator edits.

use crate::error::{DeskError, DeskResult};
use crate::session::{DeskSession, PendingSummary, parse_amount};
use attendance_client::RemoteGateway;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::client::SubmitOutcome;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::{RwLock, RwLockReadGuard};

/// Controller for one attendance desk screen
///
/// Edits from the view land here strictly in event order; the only
/// suspension points are the two gateway calls.
pub struct DeskController {
    session: RwLock<DeskSession>,
    gateway: Arc<dyn RemoteGateway>,
    /// Sequence number handed out when a roster fetch is invoked
    fetch_seq: AtomicU64,
    /// Highest fetch sequence whose response has been applied
    applied_seq: AtomicU64,
    /// Rejects re-entrant submits while one is in flight
    submitting: AtomicBool,
}

impl DeskController {
    pub fn new(gateway: Arc<dyn RemoteGateway>, session: DeskSession) -> Self {
        Self {
            session: RwLock::new(session),
            gateway,
            fetch_seq: AtomicU64::new(0),
            applied_seq: AtomicU64::new(0),
            submitting: AtomicBool::new(false),
        }
    }

    /// Read access to the session snapshot, for rendering
    pub async fn session(&self) -> RwLockReadGuard<'_, DeskSession> {
        self.session.read().await
    }

    // ========== Roster ==========

    /// Fetch the roster for a search term and apply it.
    ///
    /// Responses are applied last-invocation-wins: each call takes a
    /// sequence number up front, and a completion is dropped if a
    /// later-invoked fetch already applied. A slow early response can
    /// never clobber a fresh one. On failure the current roster stays
    /// visible and the error is returned for the view to surface.
    pub async fn refresh_roster(&self, search: impl Into<String>) -> DeskResult<()> {
        let term = search.into();
        {
            let mut session = self.session.write().await;
            session.set_search_term(term.clone());
        }

        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let query = (!term.trim().is_empty()).then_some(term.as_str());
        let roster = self.gateway.fetch_roster(query).await?;

        let mut session = self.session.write().await;
        // applied_seq is only written under the session write lock, so
        // this check-then-store cannot interleave with another apply.
        if seq > self.applied_seq.load(Ordering::SeqCst) {
            self.applied_seq.store(seq, Ordering::SeqCst);
            session.replace_roster(roster);
        } else {
            tracing::debug!(seq, "Dropping stale roster response");
        }
        Ok(())
    }

    // ========== Operator edits ==========

    /// Checkbox toggled for a member
    pub async fn set_present(&self, member_id: i64, present: bool, seed_amount: Decimal) {
        let mut session = self.session.write().await;
        session.set_present(member_id, present, seed_amount);
    }

    /// Paid amount edited as raw text in the amount field
    pub async fn amount_edited(&self, member_id: i64, raw: &str) {
        let amount = parse_amount(raw);
        let mut session = self.session.write().await;
        session.set_paid_amount(member_id, amount);
    }

    /// Paid amount set directly
    pub async fn set_paid_amount(&self, member_id: i64, amount: Decimal) {
        let mut session = self.session.write().await;
        session.set_paid_amount(member_id, amount);
    }

    /// Attendance date picked; pending entries never survive this
    pub async fn set_date(&self, new_date: NaiveDate) {
        let mut session = self.session.write().await;
        session.set_date(new_date);
    }

    /// Sidebar totals
    pub async fn summarize(&self) -> PendingSummary {
        self.session.read().await.summarize()
    }

    // ========== Submit ==========

    /// Submit the pending batch for the selected date.
    ///
    /// An empty pending set fails with `EmptyBatch` before any network
    /// call, and a second submit while one is in flight fails with
    /// `SubmitInFlight`. Any gateway failure leaves the pending set
    /// untouched so the operator can retry without re-entering
    /// amounts. On success the set is cleared and the roster is
    /// re-fetched for the current search term; a refresh failure at
    /// that point is logged, not returned, since the batch went
    /// through.
    pub async fn submit(&self) -> DeskResult<SubmitOutcome> {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(DeskError::SubmitInFlight);
        }
        let result = self.submit_inner().await;
        self.submitting.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_inner(&self) -> DeskResult<SubmitOutcome> {
        let (date, entries) = {
            let session = self.session.read().await;
            (session.selected_date(), session.build_submission()?)
        };

        let outcome = self.gateway.submit_batch(date, &entries).await?;

        let term = {
            let mut session = self.session.write().await;
            session.clear_pending();
            session.search_term().to_string()
        };
        tracing::info!(
            submitted = outcome.submitted_count,
            total_received = %outcome.total_received,
            "Attendance batch submitted"
        );

        if let Err(e) = self.refresh_roster(term).await {
            tracing::warn!(error = %e, "Roster refresh after submit failed");
        }
        Ok(outcome)
    }

    // ========== Report ==========

    /// URL of the daily report for the selected date, to be opened as
    /// a standalone document
    pub async fn daily_report_url(&self) -> String {
        let date = self.session.read().await.selected_date();
        self.gateway.daily_report_url(date)
    }
}
