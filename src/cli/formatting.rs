use chrono::{Datelike, NaiveDate};

pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

/// Renders an amount with the currency symbol and exactly two decimals.
pub fn format_amount(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{value:.2}")
}

/// Renders a date as full month name, day, year.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        month_label(date.month()),
        date.day(),
        date.year()
    )
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
