//! Audit action names recorded through the [`LoggingService`](crate::infrastructure::logging::LoggingService).

pub const EXPENSE_ADDED: &str = "EXPENSE_ADDED";
pub const EXPENSE_UPDATED: &str = "EXPENSE_UPDATED";
pub const EXPENSE_DELETED: &str = "EXPENSE_DELETED";
pub const SETTLEMENT_CREATED: &str = "SETTLEMENT_CREATED";
pub const SETTLEMENT_COMPLETED: &str = "SETTLEMENT_COMPLETED";
pub const SETTLEMENT_CANCELLED: &str = "SETTLEMENT_CANCELLED";
pub const BALANCES_QUERIED: &str = "BALANCES_QUERIED";
pub const SETTLEMENTS_OPTIMIZED: &str = "SETTLEMENTS_OPTIMIZED";
