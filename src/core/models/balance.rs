use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net position of one member, derived from the full ledger on every query.
/// `balance = total_paid - total_owed`: positive means the group owes them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub participant_id: String,
    pub total_paid: Decimal,
    pub total_owed: Decimal,
    pub balance: Decimal,
}

/// One side of a debt, as fed to the settlement optimizer. Amounts are
/// positive magnitudes on both the creditor and debtor side.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PartyAmount {
    pub participant_id: String,
    pub amount: Decimal,
}

/// Balances partitioned into who is owed and who owes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimplifiedBalances {
    pub creditors: Vec<PartyAmount>,
    pub debtors: Vec<PartyAmount>,
    pub balances: Vec<Balance>,
}

/// A suggested payment; ephemeral, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SettlementSuggestion {
    pub paid_by: String,
    pub paid_to: String,
    pub amount: Decimal,
}
