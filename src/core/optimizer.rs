//! Greedy settlement optimization: reduce N creditors and M debtors to a
//! near-minimal list of payer→payee transactions.

use crate::core::models::balance::{PartyAmount, SettlementSuggestion};
use crate::core::money;
use rust_decimal::Decimal;

struct Remaining {
    participant_id: String,
    remaining: Decimal,
}

/// Match creditors against debtors, largest remaining amount first, until one
/// side is exhausted. Both input lists carry positive magnitudes. Remainders
/// below 0.01 are treated as settled.
///
/// The greedy largest-first heuristic is a standard approximation: the true
/// minimum-transaction settlement problem is NP-hard, and this emits at most
/// `|creditors| + |debtors| - 1` transactions whose total equals the sum of
/// all credits. Ties keep input order (stable sort on amount only).
pub fn optimize_settlements(
    creditors: &[PartyAmount],
    debtors: &[PartyAmount],
) -> Vec<SettlementSuggestion> {
    let mut creditors: Vec<Remaining> = creditors
        .iter()
        .map(|c| Remaining {
            participant_id: c.participant_id.clone(),
            remaining: c.amount,
        })
        .collect();
    let mut debtors: Vec<Remaining> = debtors
        .iter()
        .map(|d| Remaining {
            participant_id: d.participant_id.clone(),
            remaining: d.amount,
        })
        .collect();

    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let epsilon = money::epsilon();
    let mut suggestions = Vec::new();
    let mut creditor_index = 0;
    let mut debtor_index = 0;

    while creditor_index < creditors.len() && debtor_index < debtors.len() {
        let creditor = &creditors[creditor_index];
        let debtor = &debtors[debtor_index];

        if creditor.remaining < epsilon {
            creditor_index += 1;
            continue;
        }
        if debtor.remaining < epsilon {
            debtor_index += 1;
            continue;
        }

        let settle_amount = creditor.remaining.min(debtor.remaining);
        if settle_amount > epsilon {
            suggestions.push(SettlementSuggestion {
                paid_by: debtor.participant_id.clone(),
                paid_to: creditor.participant_id.clone(),
                amount: money::round_currency(settle_amount),
            });
        }
        // Subtract even when the match was too small to emit, so a remainder
        // of exactly 0.01 on both sides still drains and the loop terminates.
        creditors[creditor_index].remaining =
            money::subtract(creditors[creditor_index].remaining, settle_amount);
        debtors[debtor_index].remaining =
            money::subtract(debtors[debtor_index].remaining, settle_amount);

        if creditors[creditor_index].remaining < epsilon {
            creditor_index += 1;
        }
        if debtors[debtor_index].remaining < epsilon {
            debtor_index += 1;
        }
    }

    suggestions
}
