use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::common::{Displayable, Identifiable};

/// Normalized expense fields that already passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidatedExpense {
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

/// A stored expense. The identifier is assigned at creation and never
/// changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

impl ExpenseRecord {
    pub fn new(fields: ValidatedExpense) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: fields.description,
            amount: fields.amount,
            category: fields.category,
            date: fields.date,
        }
    }

    /// Replaces every field except the identifier.
    pub fn apply(&mut self, fields: ValidatedExpense) {
        self.description = fields.description;
        self.amount = fields.amount;
        self.category = fields.category;
        self.date = fields.date;
    }
}

/// Record equality follows the identifier; field edits do not change
/// identity.
impl PartialEq for ExpenseRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ExpenseRecord {}

impl Identifiable for ExpenseRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for ExpenseRecord {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.description, self.category)
    }
}
