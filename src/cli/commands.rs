use chrono::Local;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::chart::{bar_color, render_spending_chart};
use crate::cli::core::{
    resolve_target, usage_for, CommandError, CommandResult, LoopControl, ShellContext, COMMANDS,
};
use crate::cli::formatting::format_amount;
use crate::cli::output;
use crate::cli::table::render_expense_table;
use crate::core::services::{ExpenseService, SummaryService};
use crate::core::validation::{RawExpenseInput, DATE_FORMAT};
use crate::domain::category::Category;
use crate::domain::common::Displayable;

fn usage_error(command: &str) -> CommandError {
    CommandError::Usage(format!("Usage: {}", usage_for(command)))
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

pub(crate) fn cmd_add(ctx: &mut ShellContext, args: &[String]) -> CommandResult {
    if !(3..=4).contains(&args.len()) {
        return Err(usage_error("add"));
    }
    let date = args.get(3).cloned().unwrap_or_else(today);
    let input = RawExpenseInput::new(&args[0], &args[1], &args[2], date);
    let record = ExpenseService::add(&mut ctx.book, &input)?;
    output::success(format!(
        "Recorded {} ({}).",
        record.display_label(),
        format_amount(record.amount)
    ));
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_edit(ctx: &mut ShellContext, args: &[String]) -> CommandResult {
    if !(4..=5).contains(&args.len()) {
        return Err(usage_error("edit"));
    }
    let id = resolve_target(&ctx.book, &args[0])?;
    let date = match args.get(4) {
        Some(date) => date.clone(),
        None => ctx
            .book
            .expense(id)
            .map(|record| record.date.format(DATE_FORMAT).to_string())
            .ok_or_else(|| CommandError::UnknownTarget(args[0].clone()))?,
    };
    let input = RawExpenseInput::new(&args[1], &args[2], &args[3], date);
    let record = ExpenseService::update(&mut ctx.book, id, &input)?;
    output::success(format!(
        "Updated {} ({}).",
        record.display_label(),
        format_amount(record.amount)
    ));
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_remove(ctx: &mut ShellContext, args: &[String]) -> CommandResult {
    if args.len() != 1 {
        return Err(usage_error("remove"));
    }
    let id = resolve_target(&ctx.book, &args[0])?;
    let label = ctx
        .book
        .expense(id)
        .map(Displayable::display_label)
        .unwrap_or_else(|| args[0].clone());
    if ctx.is_interactive() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {label}?"))
            .default(false)
            .interact()?;
        if !confirmed {
            output::info(format!("Kept {label}."));
            return Ok(LoopControl::Continue);
        }
    }
    match ExpenseService::remove(&mut ctx.book, id) {
        Some(record) => output::success(format!("Removed {}.", record.display_label())),
        None => output::warning("Nothing to remove."),
    }
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_list(ctx: &mut ShellContext) -> CommandResult {
    output::section("Your Expenses");
    let records = SummaryService::chronological(&ctx.book);
    output::info(render_expense_table(&records));
    if !records.is_empty() {
        let summary = SummaryService::spending_by_category(&ctx.book);
        output::blank_line();
        output::info(format!("Total: {}", format_amount(summary.grand_total)));
    }
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_chart(ctx: &mut ShellContext) -> CommandResult {
    output::section("Spending by Category");
    let summary = SummaryService::spending_by_category(&ctx.book);
    let rendered = render_spending_chart(&summary);
    for (index, line) in rendered.lines().enumerate() {
        if index < summary.per_category.len() {
            println!("{}", line.color(bar_color(index)));
        } else {
            println!("{line}");
        }
    }
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_total(ctx: &mut ShellContext) -> CommandResult {
    let summary = SummaryService::spending_by_category(&ctx.book);
    output::info(format!(
        "Total spending: {} across {} expense(s).",
        format_amount(summary.grand_total),
        ctx.book.len()
    ));
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_categories() -> CommandResult {
    let labels: Vec<&str> = Category::ALL.iter().map(|category| category.label()).collect();
    output::info(format!("Categories: {}", labels.join(", ")));
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_help() -> CommandResult {
    output::section("Commands");
    let width = COMMANDS
        .iter()
        .map(|spec| spec.usage.chars().count())
        .max()
        .unwrap_or(0);
    for spec in &COMMANDS {
        output::info(format!("{:<width$}  {}", spec.usage, spec.summary));
    }
    Ok(LoopControl::Continue)
}
