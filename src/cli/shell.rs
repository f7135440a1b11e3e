use std::io;

use dialoguer::Confirm;

use crate::cli::commands::{self, CommandError};
use crate::cli::input::{EditorInput, InputEvent, LineInput, ScriptInput};
use crate::cli::menus::{render_main_menu, MenuChoice, MAIN_MENU_PROMPT};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::errors::CliError;
use crate::utils::build_info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let mut context = ShellContext::new(mode)?;

    output::set_preferences(OutputPreferences {
        color_enabled: context.config.ui_color_enabled && mode == CliMode::Interactive,
    });

    match mode {
        CliMode::Interactive => {
            let mut input = EditorInput::new()?;
            run_session(&mut context, &mut input)
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut input = ScriptInput::new(stdin.lock());
            run_session(&mut context, &mut input)
        }
    }
}

/// Runs the main menu until the user exits or input ends.
pub fn run_session(context: &mut ShellContext, input: &mut dyn LineInput) -> Result<(), CliError> {
    context.storage.ensure_ready()?;
    print_banner(context);

    while context.running {
        render_main_menu();
        let line = match input.read_line(MAIN_MENU_PROMPT)? {
            InputEvent::Line(line) => line,
            InputEvent::Interrupted => {
                if confirm_exit(context)? {
                    break;
                }
                continue;
            }
            InputEvent::Eof => {
                output::info("Input closed. Exiting.");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        if handle_choice(context, input, &line)? == LoopControl::Exit {
            context.running = false;
        }
    }

    Ok(())
}

fn handle_choice(
    context: &mut ShellContext,
    input: &mut dyn LineInput,
    line: &str,
) -> Result<LoopControl, CliError> {
    let result = match MenuChoice::parse(line) {
        Some(MenuChoice::AddTransaction) => commands::add_transaction(context, input),
        Some(MenuChoice::MonthlySummary) => commands::monthly_summary(context, input),
        Some(MenuChoice::Exit) => {
            output::plain("Goodbye!");
            return Ok(LoopControl::Exit);
        }
        None => {
            output::warning("Please choose 1, 2, or 3.");
            return Ok(LoopControl::Continue);
        }
    };

    match result {
        Ok(()) => {}
        Err(CommandError::Cancelled) => output::info("Cancelled."),
        Err(CommandError::Invalid(err)) => output::error(err),
        Err(err @ CommandError::Storage { .. }) => {
            tracing::error!(%err, "menu action failed");
            output::error(err);
        }
        Err(CommandError::Fatal(err)) => return Err(err),
    }
    Ok(LoopControl::Continue)
}

fn confirm_exit(context: &ShellContext) -> Result<bool, CliError> {
    if context.mode == CliMode::Script {
        return Ok(true);
    }
    let confirmed = Confirm::with_theme(&context.theme)
        .with_prompt("Exit Expense Tracker?")
        .default(true)
        .interact()?;
    Ok(confirmed)
}

fn print_banner(context: &ShellContext) {
    let build = build_info::current();
    output::info(format!("Expense Tracker {}", build.summary_line()));
    if let Some(path) = &context.data_path {
        output::info(format!("Data file: {}", path.display()));
    }
}
