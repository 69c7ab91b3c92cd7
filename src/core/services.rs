use crate::constants::{
    BALANCES_QUERIED, EXPENSE_ADDED, EXPENSE_DELETED, EXPENSE_UPDATED, SETTLEMENT_CANCELLED,
    SETTLEMENT_COMPLETED, SETTLEMENT_CREATED, SETTLEMENTS_OPTIMIZED,
};
use crate::core::balance::compute_balances;
use crate::core::errors::{FieldError, LedgerError};
use crate::core::models::balance::{Balance, PartyAmount, SettlementSuggestion, SimplifiedBalances};
use crate::core::models::expense::Expense;
use crate::core::models::group::Group;
use crate::core::models::settlement::{Settlement, SettlementStatus};
use crate::core::money;
use crate::core::optimizer::optimize_settlements;
use crate::core::split::{calculate_split, SplitPolicy};
use crate::infrastructure::logging::{AuditLog, LoggingService};
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

/// Ledger operations and balance queries for one storage backend.
///
/// Split calculation, balance aggregation, and settlement optimization are
/// pure functions in [`crate::core`]; this service wires them to the storage
/// and audit-logging collaborators and owns input validation.
pub struct LedgerService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
}

impl<L: LoggingService, S: Storage> LedgerService<L, S> {
    pub fn new(storage: S, logging: L) -> Self {
        LedgerService { storage, logging }
    }

    async fn validate_group_membership(
        &self,
        group_id: &str,
        participant_id: &str,
    ) -> Result<Group, LedgerError> {
        let group = self
            .storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))?;
        if !group.is_member(participant_id) {
            return Err(LedgerError::NotGroupMember(participant_id.to_string()));
        }
        Ok(group)
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), LedgerError> {
        if value.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError::new(field, "Empty Field", format!("{} cannot be empty", field)),
            ));
        }
        if value.len() > max_length {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError::new(
                    field,
                    "Field Too Long",
                    format!("{} cannot exceed {} characters", field, max_length),
                ),
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(FieldError::new(
                field,
                "Invalid Amount",
                format!("amount must be greater than 0, got {}", amount),
            )));
        }
        if amount > Decimal::from(1_000_000u64) {
            return Err(LedgerError::InvalidAmount(FieldError::new(
                field,
                "Amount Too Large",
                "amount cannot exceed 1,000,000".to_string(),
            )));
        }
        if money::round_currency(amount) != amount {
            return Err(LedgerError::InvalidAmount(FieldError::new(
                field,
                "Invalid Amount",
                "amount cannot have more than 2 decimal places".to_string(),
            )));
        }
        Ok(())
    }

    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        participant_id: Option<&str>,
    ) -> Result<(), LedgerError> {
        self.logging.log_action(action, details, participant_id).await
    }

    pub async fn get_audit_logs(&self) -> Result<Vec<AuditLog>, LedgerError> {
        self.logging.get_logs().await
    }

    pub async fn save_group(&self, group: Group) -> Result<(), LedgerError> {
        self.storage.save_group(group).await
    }

    pub async fn get_group(&self, group_id: &str) -> Result<Option<Group>, LedgerError> {
        self.storage.get_group(group_id).await
    }

    /// Record a shared expense: validates membership, runs the split
    /// calculator, and persists the expense with its split snapshot.
    pub async fn add_expense(
        &self,
        group_id: &str,
        description: String,
        amount: Decimal,
        paid_by: &str,
        policy: SplitPolicy,
        participants: Vec<String>,
        created_by: &str,
    ) -> Result<Expense, LedgerError> {
        let group = self.validate_group_membership(group_id, created_by).await?;
        if !group.is_member(paid_by) {
            return Err(LedgerError::NotGroupMember(paid_by.to_string()));
        }
        for participant_id in &participants {
            if !group.is_member(participant_id) {
                return Err(LedgerError::NotGroupMember(participant_id.clone()));
            }
        }

        self.validate_string_input("description", &description, 255)?;
        self.validate_amount_input("amount", amount)?;

        let splits = calculate_split(amount, &policy, &participants)?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.to_string(),
            description,
            amount,
            paid_by: paid_by.to_string(),
            policy,
            splits,
            timestamp: Utc::now(),
        };
        self.storage.save_expense(expense.clone()).await?;

        info!(expense_id = %expense.id, group_id, %amount, "expense added");
        self.log_action(
            EXPENSE_ADDED,
            json!({
                "expense_id": expense.id,
                "group_id": group_id,
                "description": expense.description,
                "amount": expense.amount,
                "paid_by": expense.paid_by,
            }),
            Some(created_by),
        )
        .await?;

        Ok(expense)
    }

    /// Edit an expense. A change to the amount, policy, or participant list
    /// triggers split recomputation; unchanged fields fall back to the
    /// stored values.
    pub async fn update_expense(
        &self,
        expense_id: &str,
        description: Option<String>,
        amount: Option<Decimal>,
        policy: Option<SplitPolicy>,
        participants: Option<Vec<String>>,
        updated_by: &str,
    ) -> Result<Expense, LedgerError> {
        let mut expense = self
            .storage
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| LedgerError::ExpenseNotFound(expense_id.to_string()))?;
        let group = self
            .validate_group_membership(&expense.group_id, updated_by)
            .await?;

        if let Some(description) = description {
            self.validate_string_input("description", &description, 255)?;
            expense.description = description;
        }

        let recompute = amount.is_some() || policy.is_some() || participants.is_some();
        if recompute {
            let new_amount = amount.unwrap_or(expense.amount);
            self.validate_amount_input("amount", new_amount)?;
            let new_policy = policy.unwrap_or_else(|| expense.policy.clone());
            let new_participants = participants.unwrap_or_else(|| expense.participant_ids());
            for participant_id in &new_participants {
                if !group.is_member(participant_id) {
                    return Err(LedgerError::NotGroupMember(participant_id.clone()));
                }
            }

            expense.splits = calculate_split(new_amount, &new_policy, &new_participants)?;
            expense.amount = new_amount;
            expense.policy = new_policy;
        }

        self.storage.save_expense(expense.clone()).await?;

        info!(expense_id, recompute, "expense updated");
        self.log_action(
            EXPENSE_UPDATED,
            json!({
                "expense_id": expense_id,
                "group_id": expense.group_id,
                "amount": expense.amount,
                "split_recomputed": recompute,
            }),
            Some(updated_by),
        )
        .await?;

        Ok(expense)
    }

    pub async fn delete_expense(&self, expense_id: &str, deleted_by: &str) -> Result<(), LedgerError> {
        let expense = self
            .storage
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| LedgerError::ExpenseNotFound(expense_id.to_string()))?;
        self.validate_group_membership(&expense.group_id, deleted_by)
            .await?;

        self.storage.delete_expense(expense_id).await?;

        info!(expense_id, "expense deleted");
        self.log_action(
            EXPENSE_DELETED,
            json!({ "expense_id": expense_id, "group_id": expense.group_id }),
            Some(deleted_by),
        )
        .await?;
        Ok(())
    }

    pub async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, LedgerError> {
        self.storage.get_expense(expense_id).await
    }

    /// Record a direct payment between two members. Settlements start
    /// `Pending` and only count toward balances once completed.
    pub async fn create_settlement(
        &self,
        group_id: &str,
        paid_by: &str,
        paid_to: &str,
        amount: Decimal,
        payment_method: Option<String>,
        notes: Option<String>,
        created_by: &str,
    ) -> Result<Settlement, LedgerError> {
        let group = self.validate_group_membership(group_id, created_by).await?;

        if paid_by == paid_to {
            return Err(LedgerError::SelfSettlement);
        }
        for participant_id in [paid_by, paid_to] {
            if !group.is_member(participant_id) {
                return Err(LedgerError::NotGroupMember(participant_id.to_string()));
            }
        }
        self.validate_amount_input("amount", amount)?;

        let settlement = Settlement {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.to_string(),
            paid_by: paid_by.to_string(),
            paid_to: paid_to.to_string(),
            amount,
            status: SettlementStatus::Pending,
            payment_method,
            notes,
            created_by: created_by.to_string(),
            created_at: Utc::now(),
            settled_at: None,
        };
        self.storage.save_settlement(settlement.clone()).await?;

        info!(settlement_id = %settlement.id, group_id, %amount, "settlement created");
        self.log_action(
            SETTLEMENT_CREATED,
            json!({
                "settlement_id": settlement.id,
                "group_id": group_id,
                "paid_by": paid_by,
                "paid_to": paid_to,
                "amount": amount,
            }),
            Some(created_by),
        )
        .await?;

        Ok(settlement)
    }

    /// Mark a pending settlement as completed. Only the recipient can
    /// complete; completed is terminal.
    pub async fn complete_settlement(
        &self,
        settlement_id: &str,
        completed_by: &str,
    ) -> Result<Settlement, LedgerError> {
        let mut settlement = self
            .storage
            .get_settlement(settlement_id)
            .await?
            .ok_or_else(|| LedgerError::SettlementNotFound(settlement_id.to_string()))?;

        if completed_by != settlement.paid_to {
            return Err(LedgerError::UnauthorizedSettlementAction(completed_by.to_string()));
        }
        match settlement.status {
            SettlementStatus::Completed => {
                return Err(LedgerError::SettlementAlreadyCompleted(settlement_id.to_string()));
            }
            SettlementStatus::Cancelled => {
                return Err(LedgerError::SettlementCancelled(settlement_id.to_string()));
            }
            SettlementStatus::Pending => {}
        }

        settlement.status = SettlementStatus::Completed;
        settlement.settled_at = Some(Utc::now());
        self.storage.save_settlement(settlement.clone()).await?;

        info!(settlement_id, "settlement completed");
        self.log_action(
            SETTLEMENT_COMPLETED,
            json!({ "settlement_id": settlement_id, "group_id": settlement.group_id }),
            Some(completed_by),
        )
        .await?;

        Ok(settlement)
    }

    /// Cancel a pending settlement. Only the creator or the recipient may
    /// cancel; a completed settlement can no longer be cancelled.
    pub async fn cancel_settlement(
        &self,
        settlement_id: &str,
        cancelled_by: &str,
    ) -> Result<Settlement, LedgerError> {
        let mut settlement = self
            .storage
            .get_settlement(settlement_id)
            .await?
            .ok_or_else(|| LedgerError::SettlementNotFound(settlement_id.to_string()))?;

        if cancelled_by != settlement.created_by && cancelled_by != settlement.paid_to {
            return Err(LedgerError::UnauthorizedSettlementAction(cancelled_by.to_string()));
        }
        match settlement.status {
            SettlementStatus::Completed => {
                return Err(LedgerError::SettlementAlreadyCompleted(settlement_id.to_string()));
            }
            SettlementStatus::Cancelled => {
                return Err(LedgerError::SettlementCancelled(settlement_id.to_string()));
            }
            SettlementStatus::Pending => {}
        }

        settlement.status = SettlementStatus::Cancelled;
        self.storage.save_settlement(settlement.clone()).await?;

        info!(settlement_id, "settlement cancelled");
        self.log_action(
            SETTLEMENT_CANCELLED,
            json!({ "settlement_id": settlement_id, "group_id": settlement.group_id }),
            Some(cancelled_by),
        )
        .await?;

        Ok(settlement)
    }

    pub async fn list_pending_settlements(&self, group_id: &str) -> Result<Vec<Settlement>, LedgerError> {
        self.storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))?;
        self.storage.list_pending_settlements(group_id).await
    }

    /// Net positions for every member, recomputed from the full ledger on
    /// every call.
    pub async fn get_group_balances(&self, group_id: &str) -> Result<Vec<Balance>, LedgerError> {
        self.storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))?;

        let expenses = self.storage.list_expenses(group_id).await?;
        let settlements = self.storage.list_completed_settlements(group_id).await?;
        let balances = compute_balances(&expenses, &settlements);

        self.log_action(BALANCES_QUERIED, json!({ "group_id": group_id }), None)
            .await?;

        Ok(balances)
    }

    /// Balances partitioned into creditors (balance > 0.01) and debtors
    /// (balance < -0.01, reported as positive magnitudes).
    pub async fn get_simplified_balances(&self, group_id: &str) -> Result<SimplifiedBalances, LedgerError> {
        let balances = self.get_group_balances(group_id).await?;
        let epsilon = money::epsilon();

        let mut creditors = Vec::new();
        let mut debtors = Vec::new();
        for balance in &balances {
            if balance.balance > epsilon {
                creditors.push(PartyAmount {
                    participant_id: balance.participant_id.clone(),
                    amount: balance.balance,
                });
            } else if balance.balance < -epsilon {
                debtors.push(PartyAmount {
                    participant_id: balance.participant_id.clone(),
                    amount: balance.balance.abs(),
                });
            }
        }

        Ok(SimplifiedBalances {
            creditors,
            debtors,
            balances,
        })
    }

    /// Near-minimal list of payments that would zero out the group's debts.
    /// Derived fresh from current balances; never persisted.
    pub async fn get_optimal_settlement_suggestions(
        &self,
        group_id: &str,
    ) -> Result<Vec<SettlementSuggestion>, LedgerError> {
        let simplified = self.get_simplified_balances(group_id).await?;
        let suggestions = optimize_settlements(&simplified.creditors, &simplified.debtors);

        self.log_action(
            SETTLEMENTS_OPTIMIZED,
            json!({ "group_id": group_id, "suggestion_count": suggestions.len() }),
            None,
        )
        .await?;

        Ok(suggestions)
    }
}
