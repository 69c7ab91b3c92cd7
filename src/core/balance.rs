//! Balance aggregation: fold a group's expense and settlement history into
//! one net position per member.

use crate::core::models::balance::Balance;
use crate::core::models::expense::Expense;
use crate::core::models::settlement::{Settlement, SettlementStatus};
use crate::core::money;
use rust_decimal::Decimal;
use std::collections::HashMap;

#[derive(Default)]
struct Accumulator {
    total_paid: Decimal,
    total_owed: Decimal,
}

/// Compute every member's `{total_paid, total_owed, balance}` from the full
/// ledger. Pure and stateless: the same inputs always produce bit-identical
/// output, in order of first appearance in the ledger.
///
/// Bookkeeping convention: expenses credit the payer's `total_paid` with the
/// full amount and debit each split participant's `total_owed` with their
/// share. A payer who is also in their own split accrues both fields.
/// Completed settlements are debt reductions, not new paid/owed events: the
/// payment lowers what the payer still owes and offsets what the payee has
/// laid out, so `balance = total_paid - total_owed` converges toward zero as
/// debts settle. Pending and cancelled settlements are ignored.
pub fn compute_balances(expenses: &[Expense], settlements: &[Settlement]) -> Vec<Balance> {
    let mut order: Vec<String> = Vec::new();
    let mut accounts: HashMap<String, Accumulator> = HashMap::new();

    fn account<'a>(
        order: &mut Vec<String>,
        accounts: &'a mut HashMap<String, Accumulator>,
        id: &str,
    ) -> &'a mut Accumulator {
        if !accounts.contains_key(id) {
            order.push(id.to_string());
        }
        accounts.entry(id.to_string()).or_default()
    }

    for expense in expenses {
        let payer = account(&mut order, &mut accounts, &expense.paid_by);
        payer.total_paid = money::add(payer.total_paid, expense.amount);

        for split in &expense.splits {
            let participant = account(&mut order, &mut accounts, &split.participant_id);
            participant.total_owed = money::add(participant.total_owed, split.amount);
        }
    }

    for settlement in settlements {
        if settlement.status != SettlementStatus::Completed {
            continue;
        }
        let payer = account(&mut order, &mut accounts, &settlement.paid_by);
        payer.total_owed = money::subtract(payer.total_owed, settlement.amount);
        let payee = account(&mut order, &mut accounts, &settlement.paid_to);
        payee.total_paid = money::subtract(payee.total_paid, settlement.amount);
    }

    order
        .into_iter()
        .map(|id| {
            let account = &accounts[&id];
            Balance {
                balance: money::round_currency(money::subtract(account.total_paid, account.total_owed)),
                total_paid: money::round_currency(account.total_paid),
                total_owed: money::round_currency(account.total_owed),
                participant_id: id,
            }
        })
        .collect()
}
