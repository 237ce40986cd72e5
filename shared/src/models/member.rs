//! Member Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Member entity as served by the roster API
///
/// Remote-owned and read-only on this side: the whole roster is replaced
/// on every fetch, there is no incremental merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: i64,
    #[serde(default)]
    pub member_code: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Server-computed label like "3 / 12"; empty when not applicable
    #[serde(default)]
    pub membership_label: String,
    /// Outstanding balance; may be negative, zero or positive
    #[serde(default)]
    pub balance: Decimal,
}
