use crate::cli::formatting::{format_amount, format_date};
use crate::domain::expense::ExpenseRecord;

pub const EMPTY_LIST_MESSAGE: &str = "No expenses yet! Use `add` to get started.";

const HEADERS: [&str; 6] = ["#", "ID", "Date", "Category", "Description", "Amount"];

/// Renders the list view as a plain-text table with computed column widths.
///
/// Row numbers are 1-based and match the targets accepted by `edit` and
/// `remove`; the ID column shows the first eight characters of the
/// identifier.
pub fn render_expense_table(records: &[&ExpenseRecord]) -> String {
    if records.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    let rows: Vec<[String; 6]> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            [
                (index + 1).to_string(),
                short_id(record),
                format_date(record.date),
                record.category.to_string(),
                record.description.clone(),
                format_amount(record.amount),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(
        &HEADERS.map(|header| header.to_string()),
        &widths,
    ));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        lines.push(render_row(row, &widths));
    }
    lines.join("\n")
}

fn short_id(record: &ExpenseRecord) -> String {
    record.id.to_string().chars().take(8).collect()
}

fn render_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let mut line = String::new();
    for (index, (cell, &width)) in cells.iter().zip(widths.iter()).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        if index == 5 {
            line.push_str(&format!("{cell:>width$}"));
        } else {
            line.push_str(&format!("{cell:<width$}"));
        }
    }
    line.trim_end().to_string()
}
