//! Attendance Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment method for an attendance payment
///
/// Single variant today; the wire format is an open string so more
/// methods can be added without breaking the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
}

/// A draft attendance record awaiting submission
///
/// While an entry lives in the pending set, `present` is always true:
/// removal from the set is the only representation of "absent".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceEntry {
    pub member_id: i64,
    pub present: bool,
    /// Non-negative payment collected alongside the attendance mark
    pub paid_amount: Decimal,
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttendanceEntry {
    /// Entry for a member just marked present, seeded with the given amount
    pub fn checked_in(member_id: i64, paid_amount: Decimal) -> Self {
        Self {
            member_id,
            present: true,
            paid_amount: paid_amount.max(Decimal::ZERO),
            method: PaymentMethod::default(),
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_in_clamps_negative_seed() {
        let entry = AttendanceEntry::checked_in(7, Decimal::from(-25));
        assert!(entry.present);
        assert_eq!(entry.paid_amount, Decimal::ZERO);
        assert_eq!(entry.method, PaymentMethod::Cash);
    }

    #[test]
    fn test_wire_format_matches_api() {
        let entry = AttendanceEntry::checked_in(12, Decimal::from(500));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["member_id"], 12);
        assert_eq!(json["present"], true);
        assert_eq!(json["method"], "cash");
        // notes are omitted from the body when not set
        assert!(json.get("notes").is_none());
    }
}
