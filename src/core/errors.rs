use serde::Serialize;
use thiserror::Error;

/// Detailed field-level validation failure, enough for a caller to build a
/// 400-class response (field name, expected vs actual).
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: &str, description: String) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.to_string(),
            description,
        }
    }
}

#[derive(Error, Debug, Serialize)]
pub enum LedgerError {
    /// Split policy or its inputs are malformed (participant-set mismatch,
    /// out-of-range share, sum beyond the 0.01 tolerance, ...)
    #[error("Invalid split: {0:?}")]
    InvalidSplit(FieldError),

    /// Only reachable through direct arithmetic-utility misuse; split paths
    /// pre-validate participant counts as non-empty.
    #[error("Division by zero")]
    DivisionByZero,

    /// Amount failed validation (non-positive, too large, sub-cent precision)
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(FieldError),

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Group with given ID not found
    #[error("Group {0} not found")]
    GroupNotFound(String),

    /// User is not a member of the group
    #[error("User {0} is not a group member")]
    NotGroupMember(String),

    /// Expense with given ID not found
    #[error("Expense {0} not found")]
    ExpenseNotFound(String),

    /// Settlement with given ID not found
    #[error("Settlement {0} not found")]
    SettlementNotFound(String),

    /// Cannot create a settlement from a user to themselves
    #[error("Cannot create settlement to self")]
    SelfSettlement,

    /// Completed settlements are terminal
    #[error("Settlement {0} is already completed")]
    SettlementAlreadyCompleted(String),

    /// Cancelled settlements are terminal
    #[error("Settlement {0} has been cancelled")]
    SettlementCancelled(String),

    /// User may not perform the requested settlement transition
    #[error("User {0} is not authorized for this settlement action")]
    UnauthorizedSettlementAction(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}
