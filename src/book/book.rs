use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::expense::{ExpenseRecord, ValidatedExpense};
use crate::errors::BookError;

/// Authoritative in-memory holder of the expense records for a session.
///
/// The record vector is private: callers read through `expenses()` and
/// mutate only through the operations below, each of which bumps
/// `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseBook {
    expenses: Vec<ExpenseRecord>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ExpenseBook {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Stores a validated expense under a fresh identifier and returns the
    /// stored record.
    pub fn add(&mut self, fields: ValidatedExpense) -> ExpenseRecord {
        let record = ExpenseRecord::new(fields);
        self.expenses.push(record.clone());
        self.touch();
        record
    }

    /// Replaces the fields of the record with the given id, keeping the id.
    pub fn update(&mut self, id: Uuid, fields: ValidatedExpense) -> Result<ExpenseRecord, BookError> {
        let record = self
            .expenses
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(BookError::ExpenseNotFound(id))?;
        record.apply(fields);
        let updated = record.clone();
        self.touch();
        Ok(updated)
    }

    /// Removes the record with the given id. An unknown id is a no-op.
    pub fn remove(&mut self, id: Uuid) -> Option<ExpenseRecord> {
        let index = self.expenses.iter().position(|record| record.id == id)?;
        let removed = self.expenses.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn expense(&self, id: Uuid) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for ExpenseBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use chrono::NaiveDate;

    fn fields(description: &str, amount: f64) -> ValidatedExpense {
        ValidatedExpense {
            description: description.to_string(),
            amount,
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        }
    }

    #[test]
    fn add_stores_and_returns_the_record() {
        let mut book = ExpenseBook::new();
        let record = book.add(fields("Groceries", 75.5));
        assert_eq!(book.len(), 1);
        assert_eq!(book.expense(record.id), Some(&record));
    }

    #[test]
    fn update_unknown_id_is_an_error() {
        let mut book = ExpenseBook::new();
        let missing = Uuid::new_v4();
        let err = book.update(missing, fields("Brunch", 20.0)).unwrap_err();
        assert_eq!(err, BookError::ExpenseNotFound(missing));
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut book = ExpenseBook::new();
        book.add(fields("Groceries", 75.5));
        assert!(book.remove(Uuid::new_v4()).is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn mutations_bump_updated_at() {
        let mut book = ExpenseBook::new();
        let before = book.updated_at();
        let record = book.add(fields("Groceries", 75.5));
        assert!(book.updated_at() >= before);
        let after_add = book.updated_at();
        book.remove(record.id);
        assert!(book.updated_at() >= after_add);
    }
}
