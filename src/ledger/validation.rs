//! Parse-then-validate boundary between raw text and typed record fields.
//!
//! Every function trims surrounding whitespace, then either returns a typed
//! value or a [`ValidationError`] naming the rejected input.

use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::errors::{AmountIssue, ValidationError};

use super::{Category, Kind, Record, YearMonth};

/// Textual date layout accepted from users and written to storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));
static MONTH_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("valid month pattern"));
static NUMBER_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<mantissa>[+-]?[0-9]+(?:\.[0-9]+)?)(?:[eE](?P<exp>[+-]?[0-9]+))?$")
        .expect("valid number pattern")
});

/// Parses a zero-padded `YYYY-MM-DD` string denoting a real calendar day.
pub fn validate_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if !DATE_SHAPE.is_match(trimmed) {
        return Err(ValidationError::InvalidDate(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Parses a non-negative decimal amount, plain (`12.50`) or scientific (`1.2e3`).
///
/// The value must be representable exactly and may not exceed
/// [`max_amount`](super::max_amount).
pub fn validate_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    let invalid = |reason| ValidationError::InvalidAmount {
        input: trimmed.to_string(),
        reason,
    };
    let shape = NUMBER_SHAPE
        .captures(trimmed)
        .ok_or_else(|| invalid(AmountIssue::NotANumber))?;

    let value = match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(value) => value,
        Err(_) if trimmed.starts_with('-') => return Err(invalid(AmountIssue::Negative)),
        Err(_) if shape.name("exp").is_some_and(|exp| exp.as_str().starts_with('-')) => {
            return Err(invalid(AmountIssue::TooPrecise))
        }
        Err(_) => return Err(invalid(AmountIssue::TooLarge)),
    };
    if value < Decimal::ZERO {
        return Err(invalid(AmountIssue::Negative));
    }
    if significant_digits(&shape["mantissa"]) != parsed_digits(value) {
        return Err(invalid(AmountIssue::TooPrecise));
    }
    if value > super::max_amount() {
        return Err(invalid(AmountIssue::TooLarge));
    }
    Ok(if value.is_zero() { Decimal::ZERO } else { value })
}

/// Digits of a typed mantissa without sign, point, or padding zeros.
fn significant_digits(mantissa: &str) -> String {
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    digits.trim_start_matches('0').trim_end_matches('0').to_string()
}

fn parsed_digits(value: Decimal) -> String {
    value
        .mantissa()
        .unsigned_abs()
        .to_string()
        .trim_start_matches('0')
        .trim_end_matches('0')
        .to_string()
}

pub fn validate_kind(raw: &str) -> Result<Kind, ValidationError> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "expense" => Ok(Kind::Expense),
        "income" => Ok(Kind::Income),
        _ => Err(ValidationError::InvalidKind(trimmed.to_string())),
    }
}

pub fn validate_category(raw: &str) -> Result<Category, ValidationError> {
    let trimmed = raw.trim();
    Category::from_name(trimmed).ok_or_else(|| ValidationError::InvalidCategory {
        input: trimmed.to_string(),
        choices: Category::choices(),
    })
}

/// Parses a `YYYY-MM` month selector with the month in `01..=12`.
pub fn validate_month(raw: &str) -> Result<YearMonth, ValidationError> {
    let trimmed = raw.trim();
    let invalid = || ValidationError::InvalidMonth(trimmed.to_string());
    let captures = MONTH_SHAPE.captures(trimmed).ok_or_else(invalid)?;
    let year: i32 = captures[1].parse().map_err(|_| invalid())?;
    let month: u32 = captures[2].parse().map_err(|_| invalid())?;
    YearMonth::new(year, month).ok_or_else(invalid)
}

/// Raw field values of a proposed record, as typed by a user or read from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl RecordDraft {
    /// Runs every field validator, stopping at the first rejection.
    pub fn validate(&self) -> Result<Record, ValidationError> {
        let date = validate_date(&self.date)?;
        let kind = validate_kind(&self.kind)?;
        let amount = validate_amount(&self.amount)?;
        let category = validate_category(&self.category)?;
        Record::new(date, kind, amount, category, self.description.trim())
    }
}
