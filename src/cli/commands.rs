//! Handlers behind the main menu entries.

use thiserror::Error;

use crate::cli::forms::{record_form, FormResult};
use crate::cli::formatters::summary_lines;
use crate::cli::input::{InputEvent, LineInput};
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::errors::{CliError, TrackerError, ValidationError};
use crate::ledger::{summarize_month, validate_month};

/// Failure of a single menu action.
///
/// Everything except `Fatal` is reported and the menu is shown again.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{action}: {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: TrackerError,
    },
    #[error("Cancelled.")]
    Cancelled,
    #[error(transparent)]
    Fatal(#[from] CliError),
}

pub type CommandResult = Result<(), CommandError>;

impl CommandError {
    fn storage(action: &'static str) -> impl FnOnce(TrackerError) -> Self {
        move |source| CommandError::Storage { action, source }
    }
}

pub fn add_transaction(context: &mut ShellContext, input: &mut dyn LineInput) -> CommandResult {
    let record = match record_form(input)? {
        FormResult::Completed(record) => record,
        FormResult::Cancelled => return Err(CommandError::Cancelled),
    };
    context
        .storage
        .append(&record)
        .map_err(CommandError::storage("Could not save the transaction"))?;
    tracing::info!(date = %record.date(), kind = %record.kind(), "transaction added");
    output::success("Transaction added!");
    Ok(())
}

pub fn monthly_summary(context: &mut ShellContext, input: &mut dyn LineInput) -> CommandResult {
    let raw = match input.read_line("Enter month (YYYY-MM): ")? {
        InputEvent::Line(line) => line,
        InputEvent::Interrupted | InputEvent::Eof => return Err(CommandError::Cancelled),
    };
    let period = validate_month(&raw)?;
    let report = context
        .storage
        .load()
        .map_err(CommandError::storage("Could not read transactions"))?;

    if !report.skipped.is_empty() {
        output::warning(format!(
            "Skipped {} malformed row(s) in the data file.",
            report.skipped.len()
        ));
    }

    let summary = summarize_month(&report.records, period);
    output::section(format!("Summary for {period}"));
    for line in summary_lines(&summary, context.currency_symbol()) {
        output::plain(line);
    }
    Ok(())
}
