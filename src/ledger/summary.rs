use rust_decimal::Decimal;

use super::{Kind, Record, YearMonth};

/// Totals for a single calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_expense: Decimal,
    pub total_income: Decimal,
    pub balance: Decimal,
}

/// Sums the records dated inside `year`/`month` by kind.
///
/// A month outside `1..=12` matches nothing, so the result is all zeros,
/// exactly as for an empty slice.
pub fn summarize(records: &[Record], year: i32, month: u32) -> Summary {
    match YearMonth::new(year, month) {
        Some(period) => summarize_month(records, period),
        None => Summary::default(),
    }
}

/// Amounts are capped at [`max_amount`](super::max_amount), which keeps the
/// running totals inside the `Decimal` range.
pub fn summarize_month(records: &[Record], period: YearMonth) -> Summary {
    let (total_expense, total_income) = records
        .iter()
        .filter(|record| period.contains(record.date()))
        .fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(expense, income), record| match record.kind() {
                Kind::Expense => (expense + record.amount(), income),
                Kind::Income => (expense, income + record.amount()),
            },
        );

    tracing::debug!(%period, %total_expense, %total_income, "summarized month");

    Summary {
        total_expense,
        total_income,
        balance: total_income - total_expense,
    }
}
