//! Field-by-field data entry for the add-transaction flow.
//!
//! Each answer is validated as soon as it is typed; a rejected answer prints
//! the validation message and asks for the same field again. Typing
//! `cancel`, pressing Ctrl-C, or reaching end of input abandons the form.

use crate::cli::input::{InputEvent, LineInput};
use crate::cli::output;
use crate::errors::{CliError, ValidationError};
use crate::ledger::{
    validate_amount, validate_category, validate_date, validate_kind, Category, Record,
};

/// Keyword that abandons the current form.
pub const CANCEL_KEYWORD: &str = "cancel";

/// High-level lifecycle states emitted by the form runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

/// Prompts for one field until `validate` accepts the answer.
pub fn prompt_field<T, F>(
    input: &mut dyn LineInput,
    label: &str,
    validate: F,
) -> Result<FormResult<T>, CliError>
where
    F: Fn(&str) -> Result<T, ValidationError>,
{
    let prompt = format!("{label}: ");
    loop {
        let line = match input.read_line(&prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Interrupted | InputEvent::Eof => return Ok(FormResult::Cancelled),
        };
        if line.trim().eq_ignore_ascii_case(CANCEL_KEYWORD) {
            return Ok(FormResult::Cancelled);
        }
        match validate(&line) {
            Ok(value) => return Ok(FormResult::Completed(value)),
            Err(err) => {
                tracing::debug!(field = label, %err, "rejected field value");
                output::error(err);
            }
        }
    }
}

macro_rules! field {
    ($input:expr, $label:expr, $validate:expr) => {
        match prompt_field($input, $label, $validate)? {
            FormResult::Completed(value) => value,
            FormResult::Cancelled => return Ok(FormResult::Cancelled),
        }
    };
}

/// Collects a complete record: date, type, amount, category, description.
pub fn record_form(input: &mut dyn LineInput) -> Result<FormResult<Record>, CliError> {
    let date = field!(input, "Date (YYYY-MM-DD)", validate_date);
    let kind = field!(input, "Type (expense/income)", validate_kind);
    let amount = field!(input, "Amount", validate_amount);
    if input.is_interactive() {
        output::info(format!("Categories: {}", Category::choices()));
    }
    let category = field!(input, "Category", validate_category);
    let description = field!(input, "Description", |raw: &str| Ok(raw.trim().to_string()));

    let record = Record::new(date, kind, amount, category, description);
    match record {
        Ok(record) => Ok(FormResult::Completed(record)),
        Err(err) => {
            output::error(err);
            Ok(FormResult::Cancelled)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::input::ScriptInput;
    use crate::ledger::Kind;
    use std::io::Cursor;

    fn script(text: &str) -> ScriptInput<Cursor<String>> {
        ScriptInput::new(Cursor::new(text.to_string()))
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        let mut input = script("2023-02-30\n2023-02-28\nsoon\nExpense\n-4\n4.5\nrent\nutilities\n power \n");
        let FormResult::Completed(record) = record_form(&mut input).unwrap() else {
            panic!("form should complete");
        };
        assert_eq!(record.date().to_string(), "2023-02-28");
        assert_eq!(record.kind(), Kind::Expense);
        assert_eq!(record.amount().to_string(), "4.5");
        assert_eq!(record.category(), Category::Utilities);
        assert_eq!(record.description(), "power");
    }

    #[test]
    fn cancel_keyword_stops_the_form() {
        let mut input = script("2024-01-05\nCANCEL\nincome\n");
        assert_eq!(record_form(&mut input).unwrap(), FormResult::Cancelled);
        assert_eq!(
            input.read_line("").unwrap(),
            InputEvent::Line("income".into())
        );
    }

    #[test]
    fn end_of_input_cancels() {
        let mut input = script("2024-01-05\nincome\n");
        assert_eq!(record_form(&mut input).unwrap(), FormResult::Cancelled);
    }

    #[test]
    fn empty_description_is_allowed() {
        let mut input = script("2024-01-05\nincome\n50\nSalary\n\n");
        let FormResult::Completed(record) = record_form(&mut input).unwrap() else {
            panic!("form should complete");
        };
        assert_eq!(record.description(), "");
    }
}
