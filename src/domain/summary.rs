use serde::{Deserialize, Serialize};

use crate::domain::category::Category;

/// Summed spending for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Per-category spending breakdown over the whole collection.
///
/// `per_category` is sorted by total descending; categories with no
/// expenses are absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingSummary {
    pub per_category: Vec<CategoryTotal>,
    pub grand_total: f64,
    pub max_category_total: f64,
}

impl SpendingSummary {
    pub fn empty() -> Self {
        Self {
            per_category: Vec::new(),
            grand_total: 0.0,
            max_category_total: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.per_category.is_empty()
    }

    /// Share of the largest category total, guarded to `0.0` when the
    /// summary is empty so bar widths collapse instead of dividing by zero.
    pub fn bar_fraction(&self, total: f64) -> f64 {
        if self.max_category_total <= 0.0 {
            0.0
        } else {
            total / self.max_category_total
        }
    }
}
