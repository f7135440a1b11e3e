use std::result::Result as StdResult;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Rejection raised when raw user input cannot become a typed record field.
///
/// Every variant is recoverable: the menu loop prints it and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid date `{0}`. Please use YYYY-MM-DD.")]
    InvalidDate(String),
    #[error("Invalid amount `{input}`: {reason}.")]
    InvalidAmount { input: String, reason: AmountIssue },
    #[error("Invalid type `{0}`. Type must be 'expense' or 'income'.")]
    InvalidKind(String),
    #[error("Unknown category `{input}`. Choose from: {choices}")]
    InvalidCategory { input: String, choices: String },
    #[error("Invalid month `{0}`. Please use YYYY-MM.")]
    InvalidMonth(String),
}

/// Why an amount was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountIssue {
    #[error("not a number")]
    NotANumber,
    #[error("amount cannot be negative")]
    Negative,
    #[error("amount cannot exceed {}", crate::ledger::record::MAX_AMOUNT_UNITS)]
    TooLarge,
    #[error("amount has more digits than can be stored exactly")]
    TooPrecise,
}

/// Unified error type for the validation, storage and configuration layers.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Config(err.to_string())
    }
}

/// Errors that end the CLI process.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Editor(#[from] ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_error_message_names_reason() {
        let err = ValidationError::InvalidAmount {
            input: "-3".into(),
            reason: AmountIssue::Negative,
        };
        assert_eq!(
            err.to_string(),
            "Invalid amount `-3`: amount cannot be negative."
        );
    }

    #[test]
    fn oversized_amount_message_names_the_cap() {
        let err = ValidationError::InvalidAmount {
            input: "1e40".into(),
            reason: AmountIssue::TooLarge,
        };
        assert_eq!(
            err.to_string(),
            "Invalid amount `1e40`: amount cannot exceed 1000000000000000."
        );
    }

    #[test]
    fn io_errors_map_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = TrackerError::from(io);
        assert!(matches!(err, TrackerError::Storage(message) if message.contains("denied")));
    }

    #[test]
    fn validation_errors_pass_through_transparently() {
        let err = TrackerError::from(ValidationError::InvalidMonth("202601".into()));
        assert_eq!(err.to_string(), "Invalid month `202601`. Please use YYYY-MM.");
    }
}
