
use crate::core::models::group::Group;
use crate::core::models::participant::Participant;
use crate::core::services::LedgerService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> LedgerService<InMemoryLogging, InMemoryStorage> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    LedgerService::new(storage, logging)
}

pub async fn create_test_group(
    service: &LedgerService<InMemoryLogging, InMemoryStorage>,
    group_id: &str,
    members: &[&str],
) -> Group {
    let group = Group {
        id: group_id.to_string(),
        name: format!("{} group", group_id),
        members: members.iter().map(|m| Participant::new(m)).collect(),
    };
    service.save_group(group.clone()).await.unwrap();
    group
}
