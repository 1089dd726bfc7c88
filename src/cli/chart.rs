use colored::Color;
use once_cell::sync::Lazy;

use crate::cli::formatting::format_amount;
use crate::domain::summary::SpendingSummary;

pub const EMPTY_CHART_MESSAGE: &str = "No data to display. Add some expenses!";

const BAR_WIDTH: usize = 30;
const BAR_GLYPH: &str = "\u{2588}";

static PALETTE: Lazy<Vec<Color>> = Lazy::new(|| {
    vec![
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Green,
        Color::Red,
        Color::Blue,
    ]
});

/// Color assigned to the bar at the given position, cycling the palette.
pub fn bar_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Renders the spending breakdown as rows of proportional bars, largest
/// first, with a grand-total footer. Plain text; the caller decides about
/// color.
pub fn render_spending_chart(summary: &SpendingSummary) -> String {
    if summary.is_empty() {
        return EMPTY_CHART_MESSAGE.to_string();
    }

    let label_width = summary
        .per_category
        .iter()
        .map(|entry| entry.category.label().chars().count())
        .chain(std::iter::once("Total".chars().count()))
        .max()
        .unwrap_or(0);
    let amount_width = summary
        .per_category
        .iter()
        .map(|entry| format_amount(entry.total).chars().count())
        .chain(std::iter::once(
            format_amount(summary.grand_total).chars().count(),
        ))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(summary.per_category.len() + 2);
    for entry in &summary.per_category {
        let bar = BAR_GLYPH.repeat(bar_length(summary.bar_fraction(entry.total)));
        let amount = format_amount(entry.total);
        let label = entry.category.label();
        lines.push(
            format!("{label:<label_width$}  {amount:>amount_width$}  {bar}")
                .trim_end()
                .to_string(),
        );
    }
    lines.push(String::new());
    let total = format_amount(summary.grand_total);
    lines.push(format!("{:<label_width$}  {total:>amount_width$}", "Total"));
    lines.join("\n")
}

/// Glyph count for a bar: zero stays zero, any non-zero total gets at
/// least one glyph.
fn bar_length(fraction: f64) -> usize {
    if fraction <= 0.0 {
        0
    } else {
        ((fraction * BAR_WIDTH as f64).round() as usize).max(1)
    }
}
