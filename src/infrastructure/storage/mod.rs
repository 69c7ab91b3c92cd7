use crate::core::errors::LedgerError;
use crate::core::models::{expense::Expense, group::Group, settlement::Settlement};
use async_trait::async_trait;

/// Persistence collaborator for the ledger service. The core reads expenses
/// and completed settlements as immutable snapshots; transactional
/// consistency across reads is the implementor's concern.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_group(&self, group: Group) -> Result<(), LedgerError>;
    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, LedgerError>;

    async fn save_expense(&self, expense: Expense) -> Result<(), LedgerError>;
    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, LedgerError>;
    async fn delete_expense(&self, expense_id: &str) -> Result<(), LedgerError>;
    async fn list_expenses(&self, group_id: &str) -> Result<Vec<Expense>, LedgerError>;

    async fn save_settlement(&self, settlement: Settlement) -> Result<(), LedgerError>;
    async fn get_settlement(&self, settlement_id: &str) -> Result<Option<Settlement>, LedgerError>;
    async fn list_completed_settlements(&self, group_id: &str) -> Result<Vec<Settlement>, LedgerError>;
    async fn list_pending_settlements(&self, group_id: &str) -> Result<Vec<Settlement>, LedgerError>;
}

pub mod in_memory;
