use chrono::NaiveDate;

use crate::domain::expense::ValidatedExpense;
use crate::errors::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Free-text expense fields exactly as the shell collected them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawExpenseInput {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl RawExpenseInput {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }
}

/// Checks the raw input field by field and returns the normalized fields.
///
/// Rules run in order and the first failure wins: description, amount,
/// category, date. Pure; the caller decides what to do with the result.
pub fn validate(input: &RawExpenseInput) -> Result<ValidatedExpense, ValidationError> {
    let description = input.description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let amount_text = input.amount.trim();
    let amount = amount_text
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::InvalidAmount(amount_text.to_string()))?;
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(amount));
    }

    let category_text = input.category.trim();
    let category = category_text
        .parse()
        .map_err(|_| ValidationError::UnknownCategory(category_text.to_string()))?;

    let date_text = input.date.trim();
    let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(date_text.to_string()))?;

    Ok(ValidatedExpense {
        description: description.to_string(),
        amount,
        category,
        date,
    })
}
