use crate::core::split::SplitPolicy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One participant's share of an expense, produced by the split calculator
/// and stored alongside the expense.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SplitShare {
    pub participant_id: String,
    pub amount: Decimal,
    pub percentage: Option<Decimal>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub group_id: String,
    pub description: String,
    pub amount: Decimal,
    pub paid_by: String,
    /// Policy the stored splits were computed from; kept so edits to amount
    /// or participants can recompute the split.
    pub policy: SplitPolicy,
    pub splits: Vec<SplitShare>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Expense {
    pub fn participant_ids(&self) -> Vec<String> {
        self.splits.iter().map(|s| s.participant_id.clone()).collect()
    }
}
