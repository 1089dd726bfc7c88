use std::collections::HashSet;

use expense_core::book::ExpenseBook;
use expense_core::core::services::{ExpenseService, SummaryService};
use expense_core::core::validation::RawExpenseInput;
use expense_core::domain::category::Category;
use uuid::Uuid;

const EPSILON: f64 = 1e-9;

fn add(book: &mut ExpenseBook, description: &str, amount: &str, category: &str, date: &str) -> Uuid {
    ExpenseService::add(book, &RawExpenseInput::new(description, amount, category, date))
        .unwrap()
        .id
}

fn scenario_book() -> ExpenseBook {
    let mut book = ExpenseBook::new();
    add(&mut book, "Groceries", "75.50", "Food", "2024-01-10");
    add(&mut book, "Subway ticket", "5.50", "Transportation", "2024-01-09");
    add(&mut book, "Netflix subscription", "15.99", "Entertainment", "2024-01-08");
    book
}

#[test]
fn spending_breakdown_matches_the_reference_numbers() {
    let summary = SummaryService::spending_by_category(&scenario_book());

    assert!((summary.grand_total - 96.99).abs() < EPSILON);
    assert!((summary.max_category_total - 75.50).abs() < EPSILON);

    let order: Vec<Category> = summary
        .per_category
        .iter()
        .map(|entry| entry.category)
        .collect();
    assert_eq!(
        order,
        vec![Category::Food, Category::Entertainment, Category::Transportation]
    );

    assert!((summary.bar_fraction(75.50) - 1.0).abs() < EPSILON);
    assert!(summary.bar_fraction(5.50) < summary.bar_fraction(15.99));
}

#[test]
fn amounts_in_the_same_category_accumulate() {
    let mut book = scenario_book();
    add(&mut book, "Bakery", "10.00", "Food", "2024-01-07");

    let summary = SummaryService::spending_by_category(&book);
    let food = summary
        .per_category
        .iter()
        .find(|entry| entry.category == Category::Food)
        .unwrap();
    assert!((food.total - 85.50).abs() < EPSILON);
    assert_eq!(summary.per_category.len(), 3);
}

#[test]
fn categories_without_expenses_are_absent() {
    let summary = SummaryService::spending_by_category(&scenario_book());
    assert!(summary
        .per_category
        .iter()
        .all(|entry| entry.category != Category::Utilities));
}

#[test]
fn equal_totals_keep_first_encounter_order() {
    let mut book = ExpenseBook::new();
    add(&mut book, "Cinema", "20.00", "Entertainment", "2024-01-05");
    add(&mut book, "Pharmacy", "20.00", "Health", "2024-01-06");

    let summary = SummaryService::spending_by_category(&book);
    let order: Vec<Category> = summary
        .per_category
        .iter()
        .map(|entry| entry.category)
        .collect();
    assert_eq!(order, vec![Category::Entertainment, Category::Health]);
}

#[test]
fn list_view_is_a_permutation_sorted_by_date_descending() {
    let book = scenario_book();
    let records = SummaryService::chronological(&book);

    assert_eq!(records.len(), book.len());
    let listed: HashSet<Uuid> = records.iter().map(|record| record.id).collect();
    let stored: HashSet<Uuid> = book.expenses().iter().map(|record| record.id).collect();
    assert_eq!(listed, stored);

    for pair in records.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
    assert_eq!(records[0].description, "Groceries");
}

#[test]
fn equal_dates_keep_insertion_order() {
    let mut book = ExpenseBook::new();
    let first = add(&mut book, "Morning coffee", "3.00", "Food", "2024-01-10");
    let second = add(&mut book, "Evening snack", "4.00", "Food", "2024-01-10");

    let records = SummaryService::chronological(&book);
    assert_eq!(records[0].id, first);
    assert_eq!(records[1].id, second);
}

#[test]
fn empty_collection_yields_empty_projections() {
    let book = ExpenseBook::new();

    assert!(SummaryService::chronological(&book).is_empty());

    let summary = SummaryService::spending_by_category(&book);
    assert!(summary.is_empty());
    assert_eq!(summary.grand_total, 0.0);
    assert_eq!(summary.max_category_total, 0.0);
    assert_eq!(summary.bar_fraction(10.0), 0.0);
}
