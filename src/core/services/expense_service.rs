use uuid::Uuid;

use crate::book::ExpenseBook;
use crate::core::services::ServiceResult;
use crate::core::validation::{validate, RawExpenseInput};
use crate::domain::common::Displayable;
use crate::domain::expense::ExpenseRecord;

/// Validated mutation entry points over an expense book.
///
/// Every write goes through `validate` first, so a rejected submission
/// leaves the book untouched.
pub struct ExpenseService;

impl ExpenseService {
    pub fn add(book: &mut ExpenseBook, input: &RawExpenseInput) -> ServiceResult<ExpenseRecord> {
        let fields = validate(input)?;
        let record = book.add(fields);
        tracing::debug!(id = %record.id, "recorded {}", record.display_label());
        Ok(record)
    }

    pub fn update(
        book: &mut ExpenseBook,
        id: Uuid,
        input: &RawExpenseInput,
    ) -> ServiceResult<ExpenseRecord> {
        let fields = validate(input)?;
        let record = book.update(id, fields)?;
        tracing::debug!(id = %record.id, "updated {}", record.display_label());
        Ok(record)
    }

    pub fn remove(book: &mut ExpenseBook, id: Uuid) -> Option<ExpenseRecord> {
        let removed = book.remove(id);
        if let Some(record) = &removed {
            tracing::debug!(id = %record.id, "removed {}", record.display_label());
        }
        removed
    }

    pub fn list(book: &ExpenseBook) -> &[ExpenseRecord] {
        book.expenses()
    }
}
