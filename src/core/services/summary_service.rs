use std::cmp::Ordering;

use crate::book::ExpenseBook;
use crate::domain::expense::ExpenseRecord;
use crate::domain::summary::{CategoryTotal, SpendingSummary};

/// Read-only projections over the current collection, recomputed per call.
pub struct SummaryService;

impl SummaryService {
    /// Records sorted by date descending. The sort is stable, so records
    /// sharing a date keep their insertion order.
    pub fn chronological(book: &ExpenseBook) -> Vec<&ExpenseRecord> {
        let mut records: Vec<&ExpenseRecord> = book.expenses().iter().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    /// Groups amounts by category and orders the totals descending.
    ///
    /// Groups form in first-encounter order, and the stable sort preserves
    /// that order between equal totals. Categories with no expenses are
    /// absent from the result.
    pub fn spending_by_category(book: &ExpenseBook) -> SpendingSummary {
        let mut per_category: Vec<CategoryTotal> = Vec::new();
        let mut grand_total = 0.0;

        for record in book.expenses() {
            grand_total += record.amount;
            match per_category
                .iter_mut()
                .find(|entry| entry.category == record.category)
            {
                Some(entry) => entry.total += record.amount,
                None => per_category.push(CategoryTotal {
                    category: record.category,
                    total: record.amount,
                }),
            }
        }

        per_category.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
        let max_category_total = per_category.first().map(|entry| entry.total).unwrap_or(0.0);

        SpendingSummary {
            per_category,
            grand_total,
            max_category_total,
        }
    }
}
