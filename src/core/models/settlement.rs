use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement lifecycle. `Completed` and `Cancelled` are terminal; only
/// `Completed` settlements count toward balance aggregation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    Pending,
    Completed,
    Cancelled,
}

/// A direct payment between two members, recorded against the group ledger.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settlement {
    pub id: String,
    pub group_id: String,
    /// The debtor making the payment.
    pub paid_by: String,
    /// The creditor receiving it.
    pub paid_to: String,
    pub amount: Decimal,
    pub status: SettlementStatus,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub settled_at: Option<chrono::DateTime<chrono::Utc>>,
}
