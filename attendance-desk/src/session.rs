//! Desk session state
//!
//! The in-memory model behind the attendance screen: the fetched
//! roster, the pending set of draft entries keyed by member id, the
//! selected date and the transient search text. All mutations here are
//! synchronous; network orchestration lives in the controller.
//!
//! The pending set is the single source of truth for what will be
//! submitted. An entry's existence *is* the "present" mark: there is no
//! stored representation of "present = false", removal is the only way
//! to mark a member absent again.

use crate::error::{DeskError, DeskResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{AttendanceEntry, Member};
use std::collections::BTreeMap;

/// Totals over the pending set, as shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingSummary {
    /// Number of live pending entries, orphans included
    pub count: usize,
    /// Sum of paid amounts over entries whose member is in the roster
    pub total_amount: Decimal,
}

/// Coerce operator-typed text into a non-negative amount
///
/// Unparseable or negative input becomes zero; an amount field never
/// fails, it just resets.
pub fn parse_amount(raw: &str) -> Decimal {
    raw.trim()
        .parse::<Decimal>()
        .map(|amount| amount.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// State for one attendance desk screen
///
/// A member not present in `pending` is absent. Entries whose member id
/// no longer resolves in the roster (the roster was re-fetched with a
/// narrower search) are orphans: kept in the set, skipped in totals,
/// cleared only by a date change or a successful submit.
#[derive(Debug, Clone)]
pub struct DeskSession {
    roster: Vec<Member>,
    pending: BTreeMap<i64, AttendanceEntry>,
    selected_date: NaiveDate,
    search_term: String,
}

impl DeskSession {
    /// Create a session for the given attendance date
    pub fn new(date: NaiveDate) -> Self {
        Self {
            roster: Vec::new(),
            pending: BTreeMap::new(),
            selected_date: date,
            search_term: String::new(),
        }
    }

    /// Session for today's date
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    // ========== Accessors ==========

    pub fn roster(&self) -> &[Member] {
        &self.roster
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending entry for a member, if they are marked present
    pub fn pending_entry(&self, member_id: i64) -> Option<&AttendanceEntry> {
        self.pending.get(&member_id)
    }

    /// Look up a member in the current roster
    pub fn member(&self, member_id: i64) -> Option<&Member> {
        self.roster.iter().find(|m| m.id == member_id)
    }

    /// Pending entries paired with their roster member, for display.
    /// Orphaned entries are skipped, not removed.
    pub fn pending_rows(&self) -> Vec<(&AttendanceEntry, &Member)> {
        self.pending
            .values()
            .filter_map(|entry| self.member(entry.member_id).map(|m| (entry, m)))
            .collect()
    }

    // ========== Reconciliation ==========

    /// Toggle a member's presence mark.
    ///
    /// Checking inserts a fresh entry seeded with `seed_amount` (clamped
    /// to zero); unchecking removes the entry. Both directions are
    /// idempotent: re-checking keeps the existing entry and its amount,
    /// unchecking an absent member does nothing.
    pub fn set_present(&mut self, member_id: i64, present: bool, seed_amount: Decimal) {
        if present {
            self.pending
                .entry(member_id)
                .or_insert_with(|| AttendanceEntry::checked_in(member_id, seed_amount));
        } else {
            self.pending.remove(&member_id);
        }
    }

    /// Update the paid amount for a member marked present.
    ///
    /// Editing is gated by presence: an amount typed for an unchecked
    /// member is not remembered, the call is a silent no-op.
    pub fn set_paid_amount(&mut self, member_id: i64, amount: Decimal) {
        if let Some(entry) = self.pending.get_mut(&member_id) {
            entry.paid_amount = amount.max(Decimal::ZERO);
        }
    }

    /// Change the selected date.
    ///
    /// Pending entries are implicitly scoped to the selected date, so
    /// the set is cleared unconditionally; nothing carries over.
    pub fn set_date(&mut self, new_date: NaiveDate) {
        self.selected_date = new_date;
        self.pending.clear();
    }

    /// Remember the current search filter text
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replace the roster wholesale with a fresh fetch.
    ///
    /// Pending entries whose member disappeared from the new roster are
    /// left in place as orphans.
    pub fn replace_roster(&mut self, members: Vec<Member>) {
        self.roster = members;
    }

    /// Count and total of the pending set.
    ///
    /// The count covers every live entry; the total only sums entries
    /// whose member resolves in the current roster.
    pub fn summarize(&self) -> PendingSummary {
        let total_amount = self
            .pending
            .values()
            .filter(|entry| self.member(entry.member_id).is_some())
            .map(|entry| entry.paid_amount)
            .sum();

        PendingSummary {
            count: self.pending.len(),
            total_amount,
        }
    }

    /// Snapshot the pending set for submission, in map order.
    ///
    /// The order is deterministic for a given set of entries; an empty
    /// set is a local precondition failure, no network call should be
    /// made.
    pub fn build_submission(&self) -> DeskResult<Vec<AttendanceEntry>> {
        if self.pending.is_empty() {
            return Err(DeskError::EmptyBatch);
        }
        Ok(self.pending.values().cloned().collect())
    }

    /// Drop all pending entries after the server accepted the batch
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }
}

impl Default for DeskSession {
    fn default() -> Self {
        Self::today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, name: &str) -> Member {
        Member {
            id,
            member_code: format!("M{id:03}"),
            full_name: name.to_string(),
            phone: None,
            membership_label: String::new(),
            balance: Decimal::ZERO,
        }
    }

    fn session_with_roster() -> DeskSession {
        let mut session = DeskSession::new(NaiveDate::from_ymd_opt(2025, 11, 26).unwrap());
        session.replace_roster(vec![member(1, "Asha Rao"), member(2, "Ravi Kumar")]);
        session
    }

    #[test]
    fn test_entry_exists_iff_last_toggle_was_check() {
        let mut session = session_with_roster();

        session.set_present(1, true, Decimal::from(50));
        assert!(session.pending_entry(1).is_some());

        session.set_present(1, false, Decimal::ZERO);
        assert!(session.pending_entry(1).is_none());

        session.set_present(1, true, Decimal::from(20));
        session.set_present(1, true, Decimal::from(99));
        let entry = session.pending_entry(1).unwrap();
        // re-checking is a no-op, the original entry survives
        assert_eq!(entry.paid_amount, Decimal::from(20));
        assert_eq!(session.pending_len(), 1);
    }

    #[test]
    fn test_uncheck_absent_member_is_idempotent() {
        let mut session = session_with_roster();
        session.set_present(1, false, Decimal::ZERO);
        assert!(session.is_pending_empty());
    }

    #[test]
    fn test_amount_edit_gated_by_presence() {
        let mut session = session_with_roster();

        // typing an amount for an unchecked member is not remembered
        session.set_paid_amount(1, Decimal::from(500));
        assert!(session.pending_entry(1).is_none());

        session.set_present(1, true, Decimal::ZERO);
        session.set_paid_amount(1, Decimal::from(500));
        assert_eq!(
            session.pending_entry(1).unwrap().paid_amount,
            Decimal::from(500)
        );
    }

    #[test]
    fn test_negative_amounts_clamp_to_zero() {
        let mut session = session_with_roster();
        session.set_present(1, true, Decimal::from(-10));
        assert_eq!(session.pending_entry(1).unwrap().paid_amount, Decimal::ZERO);

        session.set_paid_amount(1, Decimal::from(-5));
        assert_eq!(session.pending_entry(1).unwrap().paid_amount, Decimal::ZERO);
    }

    #[test]
    fn test_date_change_always_clears_pending() {
        let mut session = session_with_roster();
        session.set_present(1, true, Decimal::from(50));
        session.set_present(2, true, Decimal::ZERO);

        session.set_date(NaiveDate::from_ymd_opt(2025, 11, 27).unwrap());
        assert!(session.is_pending_empty());
        assert_eq!(
            session.selected_date(),
            NaiveDate::from_ymd_opt(2025, 11, 27).unwrap()
        );
    }

    #[test]
    fn test_orphans_excluded_from_total_but_kept() {
        let mut session = session_with_roster();
        session.set_present(1, true, Decimal::from(50));
        session.set_present(2, true, Decimal::from(30));

        // narrower search drops member 2 from the roster
        session.replace_roster(vec![member(1, "Asha Rao")]);

        let summary = session.summarize();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_amount, Decimal::from(50));

        // the orphan still goes out with the submission
        let entries = session.build_submission().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(session.pending_rows().len(), 1);
    }

    #[test]
    fn test_build_submission_empty_batch() {
        let session = session_with_roster();
        assert!(matches!(
            session.build_submission(),
            Err(DeskError::EmptyBatch)
        ));
    }

    #[test]
    fn test_build_submission_returns_current_entries_once() {
        let mut session = session_with_roster();
        session.set_present(2, true, Decimal::from(30));
        session.set_present(1, true, Decimal::from(50));

        let entries = session.build_submission().unwrap();
        assert_eq!(entries.len(), 2);
        let ids: Vec<i64> = entries.iter().map(|e| e.member_id).collect();
        assert_eq!(ids, vec![1, 2]);

        // deterministic per call while the set is unchanged
        assert_eq!(session.build_submission().unwrap(), entries);
    }

    #[test]
    fn test_clear_pending_after_submit_success() {
        let mut session = session_with_roster();
        session.set_present(1, true, Decimal::from(50));

        session.clear_pending();
        assert!(session.is_pending_empty());
        assert!(matches!(
            session.build_submission(),
            Err(DeskError::EmptyBatch)
        ));
    }

    #[test]
    fn test_summary_scenario_check_uncheck_date_change() {
        let mut session = session_with_roster();

        session.set_present(1, true, Decimal::from(50));
        session.set_present(2, true, Decimal::ZERO);
        let summary = session.summarize();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_amount, Decimal::from(50));

        session.set_present(1, false, Decimal::ZERO);
        let summary = session.summarize();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.total_amount, Decimal::ZERO);

        session.set_date(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        let summary = session.summarize();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_amount, Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_coercion() {
        assert_eq!(parse_amount("50"), Decimal::from(50));
        assert_eq!(parse_amount(" 12.50 "), Decimal::new(1250, 2));
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("-3"), Decimal::ZERO);
    }
}
