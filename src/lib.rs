pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::balance::compute_balances;
pub use crate::core::errors::LedgerError;
pub use crate::core::optimizer::optimize_settlements;
pub use crate::core::services::LedgerService;
pub use crate::core::split::{calculate_split, SplitPolicy};
pub use crate::infrastructure::logging::in_memory::InMemoryLogging;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
