use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{AmountIssue, ValidationError};

use super::category::Category;

/// Direction of money flow for a record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Expense,
    Income,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Expense => "expense",
            Kind::Income => "income",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Largest amount a single record may carry, in whole currency units.
///
/// Summing more than 79 trillion records at this cap is needed to leave the
/// `Decimal` range, so monthly totals never overflow.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

pub fn max_amount() -> Decimal {
    Decimal::from(MAX_AMOUNT_UNITS)
}

/// One logged financial event.
///
/// Fields are private so a `Record` can only be built from typed values that
/// already passed validation; a negative or oversized amount is refused here
/// as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    date: NaiveDate,
    kind: Kind,
    amount: Decimal,
    category: Category,
    description: String,
}

impl Record {
    pub fn new(
        date: NaiveDate,
        kind: Kind,
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::InvalidAmount {
                input: amount.to_string(),
                reason: AmountIssue::Negative,
            });
        }
        if amount > max_amount() {
            return Err(ValidationError::InvalidAmount {
                input: amount.to_string(),
                reason: AmountIssue::TooLarge,
            });
        }
        Ok(Self {
            date,
            kind,
            // folds `-0` into zero
            amount: if amount.is_zero() { Decimal::ZERO } else { amount },
            category,
            description: description.into(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A calendar month selector such as `2024-01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn record_rejects_negative_amount() {
        let err = Record::new(
            date(2024, 1, 1),
            Kind::Expense,
            Decimal::from_str("-1.50").unwrap(),
            Category::Other,
            "",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidAmount {
                reason: AmountIssue::Negative,
                ..
            }
        ));
    }

    #[test]
    fn record_rejects_amounts_above_cap() {
        let at_cap = Record::new(
            date(2024, 1, 1),
            Kind::Income,
            max_amount(),
            Category::Salary,
            "",
        );
        assert!(at_cap.is_ok());

        for amount in [max_amount() + Decimal::new(1, 2), Decimal::MAX] {
            let err = Record::new(date(2024, 1, 1), Kind::Income, amount, Category::Salary, "")
                .unwrap_err();
            assert!(matches!(
                err,
                ValidationError::InvalidAmount {
                    reason: AmountIssue::TooLarge,
                    ..
                }
            ));
        }
    }

    #[test]
    fn record_keeps_numeric_value() {
        let record = Record::new(
            date(2024, 1, 1),
            Kind::Income,
            Decimal::from_str("12.50").unwrap(),
            Category::Salary,
            "pay",
        )
        .unwrap();
        assert_eq!(record.amount(), Decimal::from_str("12.5").unwrap());
        assert_eq!(record.description(), "pay");
    }

    #[test]
    fn year_month_bounds_and_display() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
        let ym = YearMonth::new(2024, 3).unwrap();
        assert_eq!(ym.to_string(), "2024-03");
        assert!(ym.contains(date(2024, 3, 31)));
        assert!(!ym.contains(date(2023, 3, 1)));
        assert_eq!(YearMonth::of(date(2024, 3, 9)), ym);
    }
}
