//! Interactive command-line shell over the expense core.

pub mod chart;
pub mod commands;
pub mod core;
pub mod formatting;
pub mod output;
pub mod shell;
pub mod table;

pub use self::core::{CliError, CliMode, ShellContext};
pub use self::shell::run_cli;

use chrono::{Duration, Local};

use crate::book::ExpenseBook;
use crate::domain::category::Category;
use crate::domain::expense::ValidatedExpense;

/// A book pre-filled with a handful of recent expenses so the shell has
/// something to show on first launch.
pub fn sample_book() -> ExpenseBook {
    let today = Local::now().date_naive();
    let seeds = [
        ("Groceries", 75.50, Category::Food, 0),
        ("Subway ticket", 5.50, Category::Transportation, 1),
        ("Netflix subscription", 15.99, Category::Entertainment, 2),
        ("Electric bill", 120.00, Category::Utilities, 3),
        ("New running shoes", 95.00, Category::Shopping, 4),
    ];
    let mut book = ExpenseBook::new();
    for (description, amount, category, days_ago) in seeds {
        book.add(ValidatedExpense {
            description: description.to_string(),
            amount,
            category,
            date: today - Duration::days(days_ago),
        });
    }
    book
}
