use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Cmd, Context, Editor, Helper, KeyEvent};

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::{output, sample_book};

/// When set, the shell reads plain lines from stdin instead of rustyline.
pub const SCRIPT_MODE_VAR: &str = "EXPENSE_CORE_CLI_SCRIPT";

const PROMPT: &str = "expense> ";

/// Builds the session book and runs the shell in the mode selected by the
/// environment.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var(SCRIPT_MODE_VAR).is_ok() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    let mut ctx = ShellContext::new(sample_book(), mode);
    match mode {
        CliMode::Interactive => run_interactive(&mut ctx),
        CliMode::Script => run_script(&mut ctx),
    }
}

fn run_interactive(ctx: &mut ShellContext) -> Result<(), CliError> {
    let mut editor: Editor<CommandHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(CommandHelper::new()));
    editor.bind_sequence(KeyEvent::from('\t'), Cmd::Complete);

    output::info("Expense shell ready. Type `help` for the command list.");
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                if handle_line(ctx, &line) == LoopControl::Exit {
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                output::info("Type `exit` to leave the shell.");
            }
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    output::info("Exiting shell.");
    Ok(())
}

fn run_script(ctx: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if handle_line(ctx, &line) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn handle_line(ctx: &mut ShellContext, line: &str) -> LoopControl {
    let tokens = match shell_words::split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(format!("Could not parse input: {err}"));
            return LoopControl::Continue;
        }
    };
    let Some((command, args)) = tokens.split_first() else {
        return LoopControl::Continue;
    };
    ctx.dispatch(&command.to_lowercase(), args)
}

/// Rustyline helper offering first-word command completion.
struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new() -> Self {
        Self {
            commands: ShellContext::command_names(),
        }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        if prefix.contains(' ') {
            return Ok((pos, Vec::new()));
        }
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}
