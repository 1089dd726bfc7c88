use thiserror::Error;
use uuid::Uuid;

/// Reasons an expense submission is rejected before it reaches the book.
///
/// Each variant carries a distinct user-facing message so the shell can tell
/// the user exactly which field to fix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Amount is not a number: `{0}`")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(f64),

    #[error("Unknown category: `{0}`")]
    UnknownCategory(String),

    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Failures raised by the expense book itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookError {
    #[error("Expense not found: {0}")]
    ExpenseNotFound(Uuid),
}
