use rust_decimal::{Decimal, RoundingStrategy};

use crate::ledger::Summary;

const DISPLAY_PRECISION: u32 = 2;

/// Formats an amount with two decimals and an optional currency prefix.
///
/// The sign goes in front of the symbol: `-$60.25`.
pub fn format_amount(amount: Decimal, symbol: Option<&str>) -> String {
    let mut value = amount
        .abs()
        .round_dp_with_strategy(DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(DISPLAY_PRECISION);
    let sign = if amount < Decimal::ZERO && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{}{value}", symbol.unwrap_or_default())
}

/// The three summary lines, labels padded to line up.
pub fn summary_lines(summary: &Summary, symbol: Option<&str>) -> [String; 3] {
    [
        format!(
            "Total Expense: {}",
            format_amount(summary.total_expense, symbol)
        ),
        format!(
            "Total Income:  {}",
            format_amount(summary.total_income, symbol)
        ),
        format!("Balance:       {}", format_amount(summary.balance, symbol)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn pads_and_rounds_to_cents() {
        assert_eq!(format_amount(dec("10"), None), "10.00");
        assert_eq!(format_amount(dec("0.015"), None), "0.02");
        assert_eq!(format_amount(dec("1234.5"), Some("$")), "$1234.50");
    }

    #[test]
    fn sign_precedes_symbol() {
        assert_eq!(format_amount(dec("-60.25"), Some("$")), "-$60.25");
        assert_eq!(format_amount(dec("-0.001"), Some("$")), "$0.00");
    }

    #[test]
    fn summary_lines_label_each_total() {
        let summary = Summary {
            total_expense: dec("10"),
            total_income: dec("50"),
            balance: dec("40"),
        };
        let [expense, income, balance] = summary_lines(&summary, None);
        assert_eq!(expense, "Total Expense: 10.00");
        assert_eq!(income, "Total Income:  50.00");
        assert_eq!(balance, "Balance:       40.00");
    }
}
