pub mod expense_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use summary_service::SummaryService;

use thiserror::Error;

use crate::errors::{BookError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Unified error surface the shell handles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Book(#[from] BookError),
}
