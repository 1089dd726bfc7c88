use chrono::NaiveDate;
use expense_core::core::validation::{validate, RawExpenseInput};
use expense_core::domain::category::Category;
use expense_core::errors::ValidationError;

fn input(description: &str, amount: &str, category: &str, date: &str) -> RawExpenseInput {
    RawExpenseInput::new(description, amount, category, date)
}

#[test]
fn accepts_and_normalizes_a_well_formed_submission() {
    let validated = validate(&input("  Coffee beans ", " 3.5 ", " food ", " 2024-03-01 ")).unwrap();
    assert_eq!(validated.description, "Coffee beans");
    assert_eq!(validated.amount, 3.5);
    assert_eq!(validated.category, Category::Food);
    assert_eq!(validated.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
}

#[test]
fn rejects_blank_descriptions() {
    for description in ["", "   ", "\t"] {
        assert_eq!(
            validate(&input(description, "10", "Food", "2024-03-01")),
            Err(ValidationError::EmptyDescription)
        );
    }
}

#[test]
fn rejects_amounts_that_do_not_parse() {
    assert_eq!(
        validate(&input("Coffee", "ten", "Food", "2024-03-01")),
        Err(ValidationError::InvalidAmount("ten".to_string()))
    );
    assert_eq!(
        validate(&input("Coffee", "", "Food", "2024-03-01")),
        Err(ValidationError::InvalidAmount(String::new()))
    );
}

#[test]
fn rejects_non_finite_amounts() {
    for text in ["inf", "-inf", "NaN"] {
        assert_eq!(
            validate(&input("Coffee", text, "Food", "2024-03-01")),
            Err(ValidationError::InvalidAmount(text.to_string()))
        );
    }
}

#[test]
fn rejects_zero_and_negative_amounts() {
    assert_eq!(
        validate(&input("Coffee", "0", "Food", "2024-03-01")),
        Err(ValidationError::NonPositiveAmount(0.0))
    );
    assert_eq!(
        validate(&input("Coffee", "-3.5", "Food", "2024-03-01")),
        Err(ValidationError::NonPositiveAmount(-3.5))
    );
}

#[test]
fn rejects_unknown_categories() {
    assert_eq!(
        validate(&input("Coffee", "3.5", "Rent", "2024-03-01")),
        Err(ValidationError::UnknownCategory("Rent".to_string()))
    );
}

#[test]
fn accepts_categories_regardless_of_case() {
    let validated = validate(&input("Coffee", "3.5", "ENTERTAINMENT", "2024-03-01")).unwrap();
    assert_eq!(validated.category, Category::Entertainment);
}

#[test]
fn rejects_malformed_dates() {
    for date in ["2024-13-01", "01-03-2024", "yesterday", ""] {
        assert_eq!(
            validate(&input("Coffee", "3.5", "Food", date)),
            Err(ValidationError::InvalidDate(date.trim().to_string()))
        );
    }
}

#[test]
fn the_first_failing_rule_wins() {
    // description is checked before the bad amount, amount before the bad
    // category, category before the bad date
    assert_eq!(
        validate(&input("  ", "-5", "Rent", "nope")),
        Err(ValidationError::EmptyDescription)
    );
    assert_eq!(
        validate(&input("Coffee", "-5", "Rent", "nope")),
        Err(ValidationError::NonPositiveAmount(-5.0))
    );
    assert_eq!(
        validate(&input("Coffee", "3.5", "Rent", "nope")),
        Err(ValidationError::UnknownCategory("Rent".to_string()))
    );
    assert_eq!(
        validate(&input("Coffee", "3.5", "Food", "nope")),
        Err(ValidationError::InvalidDate("nope".to_string()))
    );
}
