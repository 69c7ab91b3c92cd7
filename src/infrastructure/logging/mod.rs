use crate::core::errors::LedgerError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One recorded ledger action.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    pub action: String,
    pub participant_id: Option<String>,
    pub details: serde_json::Value,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Audit sink for ledger mutations and queries. The pure computation
/// functions never log; only the service layer records actions here.
#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        participant_id: Option<&str>,
    ) -> Result<(), LedgerError>;
    async fn get_logs(&self) -> Result<Vec<AuditLog>, LedgerError>;
}

pub mod in_memory;
