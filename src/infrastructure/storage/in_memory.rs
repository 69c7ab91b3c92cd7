use crate::core::errors::LedgerError;
use crate::core::models::{
    expense::Expense,
    group::Group,
    settlement::{Settlement, SettlementStatus},
};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Reference storage implementation backed by shared in-memory maps.
/// Listings come back in chronological order so balance output is stable
/// across identical queries.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    groups: Arc<RwLock<HashMap<String, Group>>>,
    expenses: Arc<RwLock<HashMap<String, Expense>>>,
    settlements: Arc<RwLock<HashMap<String, Settlement>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    async fn settlements_with_status(&self, group_id: &str, status: SettlementStatus) -> Vec<Settlement> {
        let settlements = self.settlements.read().await;
        let mut matching: Vec<Settlement> = settlements
            .values()
            .filter(|s| s.group_id == group_id && s.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        matching
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_group(&self, group: Group) -> Result<(), LedgerError> {
        let mut groups = self.groups.write().await;
        groups.insert(group.id.clone(), group);
        Ok(())
    }

    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, LedgerError> {
        let groups = self.groups.read().await;
        Ok(groups.get(group_id).cloned())
    }

    async fn save_expense(&self, expense: Expense) -> Result<(), LedgerError> {
        let mut expenses = self.expenses.write().await;
        expenses.insert(expense.id.clone(), expense);
        Ok(())
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, LedgerError> {
        let expenses = self.expenses.read().await;
        Ok(expenses.get(expense_id).cloned())
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<(), LedgerError> {
        let mut expenses = self.expenses.write().await;
        expenses.remove(expense_id);
        Ok(())
    }

    async fn list_expenses(&self, group_id: &str) -> Result<Vec<Expense>, LedgerError> {
        let expenses = self.expenses.read().await;
        let mut matching: Vec<Expense> = expenses
            .values()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| (a.timestamp, &a.id).cmp(&(b.timestamp, &b.id)));
        Ok(matching)
    }

    async fn save_settlement(&self, settlement: Settlement) -> Result<(), LedgerError> {
        let mut settlements = self.settlements.write().await;
        settlements.insert(settlement.id.clone(), settlement);
        Ok(())
    }

    async fn get_settlement(&self, settlement_id: &str) -> Result<Option<Settlement>, LedgerError> {
        let settlements = self.settlements.read().await;
        Ok(settlements.get(settlement_id).cloned())
    }

    async fn list_completed_settlements(&self, group_id: &str) -> Result<Vec<Settlement>, LedgerError> {
        Ok(self
            .settlements_with_status(group_id, SettlementStatus::Completed)
            .await)
    }

    async fn list_pending_settlements(&self, group_id: &str) -> Result<Vec<Settlement>, LedgerError> {
        Ok(self
            .settlements_with_status(group_id, SettlementStatus::Pending)
            .await)
    }
}
