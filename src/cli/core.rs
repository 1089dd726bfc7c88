use std::io;

use thiserror::Error;
use uuid::Uuid;

use crate::book::ExpenseBook;
use crate::cli::{commands, output};
use crate::core::services::{ServiceError, SummaryService};
use crate::domain::common::Identifiable;

/// How the shell reads its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Whether the command loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Fatal shell failures that end the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Per-command failures reported to the user; the loop keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Usage(String),

    #[error("No expense matches `{0}`")]
    UnknownTarget(String),

    #[error("`{0}` matches more than one expense; use more characters")]
    AmbiguousTarget(String),

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

pub(crate) type CommandResult = Result<LoopControl, CommandError>;

pub(crate) struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub(crate) const COMMANDS: [CommandSpec; 9] = [
    CommandSpec {
        name: "add",
        usage: "add <description> <amount> <category> [date]",
        summary: "Record a new expense (date defaults to today)",
    },
    CommandSpec {
        name: "edit",
        usage: "edit <row|id> <description> <amount> <category> [date]",
        summary: "Replace the fields of an existing expense",
    },
    CommandSpec {
        name: "remove",
        usage: "remove <row|id>",
        summary: "Delete an expense (alias: delete)",
    },
    CommandSpec {
        name: "list",
        usage: "list",
        summary: "Show all expenses, newest first",
    },
    CommandSpec {
        name: "chart",
        usage: "chart",
        summary: "Show spending per category as proportional bars",
    },
    CommandSpec {
        name: "total",
        usage: "total",
        summary: "Show the grand total of all expenses",
    },
    CommandSpec {
        name: "categories",
        usage: "categories",
        summary: "List the accepted category names",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "Show this command overview",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell (alias: quit)",
    },
];

/// Session state threaded through every command handler.
pub struct ShellContext {
    pub book: ExpenseBook,
    mode: CliMode,
}

impl ShellContext {
    pub fn new(book: ExpenseBook, mode: CliMode) -> Self {
        Self { book, mode }
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub fn command_names() -> Vec<String> {
        COMMANDS
            .iter()
            .map(|spec| spec.name.to_string())
            .chain(["delete".to_string(), "quit".to_string()])
            .collect()
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[String]) -> LoopControl {
        let outcome = match command {
            "add" => commands::cmd_add(self, args),
            "edit" => commands::cmd_edit(self, args),
            "remove" | "delete" => commands::cmd_remove(self, args),
            "list" => commands::cmd_list(self),
            "chart" => commands::cmd_chart(self),
            "total" => commands::cmd_total(self),
            "categories" => commands::cmd_categories(),
            "help" => commands::cmd_help(),
            "exit" | "quit" => Ok(LoopControl::Exit),
            other => {
                match suggest_command(other) {
                    Some(name) => {
                        output::warning(format!("Unknown command `{other}`. Did you mean `{name}`?"))
                    }
                    None => output::warning(format!(
                        "Unknown command `{other}`. Type `help` for the command list."
                    )),
                }
                Ok(LoopControl::Continue)
            }
        };
        match outcome {
            Ok(control) => control,
            Err(err) => {
                output::error(err);
                LoopControl::Continue
            }
        }
    }
}

pub(crate) fn usage_for(name: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.usage)
        .unwrap_or("")
}

/// Closest known command within an edit distance of two.
fn suggest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|spec| spec.name)
        .chain(["delete", "quit"])
        .map(|name| (strsim::levenshtein(input, name), name))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

/// Resolves an `edit`/`remove` target, either a 1-based row of the current
/// list view or an id prefix of at least four characters.
pub(crate) fn resolve_target(book: &ExpenseBook, raw: &str) -> Result<Uuid, CommandError> {
    if let Ok(row) = raw.parse::<usize>() {
        let records = SummaryService::chronological(book);
        return row
            .checked_sub(1)
            .and_then(|index| records.get(index))
            .map(|record| record.id)
            .ok_or_else(|| CommandError::UnknownTarget(raw.to_string()));
    }
    match_id_prefix(book.expenses(), raw)
}

fn match_id_prefix<T: Identifiable>(items: &[T], raw: &str) -> Result<Uuid, CommandError> {
    let needle = raw.trim().to_lowercase();
    if needle.len() < 4 {
        return Err(CommandError::Usage(format!(
            "Target `{raw}` is too short; give a row number or at least four id characters"
        )));
    }
    let mut matches = items
        .iter()
        .filter(|item| item.id().to_string().starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(item.id()),
        (Some(_), Some(_)) => Err(CommandError::AmbiguousTarget(raw.to_string())),
        (None, _) => Err(CommandError::UnknownTarget(raw.to_string())),
    }
}
