use crate::core::errors::LedgerError;
use crate::infrastructure::logging::{AuditLog, LoggingService};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryLogging {
    logs: Arc<RwLock<Vec<AuditLog>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        participant_id: Option<&str>,
    ) -> Result<(), LedgerError> {
        let mut logs = self.logs.write().await;
        logs.push(AuditLog {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            participant_id: participant_id.map(String::from),
            details,
            timestamp: chrono::Utc::now(),
        });
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AuditLog>, LedgerError> {
        let logs = self.logs.read().await;
        Ok(logs.clone())
    }
}
