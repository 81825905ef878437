//! Money and date formatting for display.
//!
//! Amounts are currency-agnostic numbers interpreted as USD; rendering
//! follows the en-US convention: `$` symbol, comma grouping, exactly two
//! fraction digits.

use chrono::{Datelike, NaiveDate};

/// Formats a value as en-US USD, e.g. `1250.0` → `$1,250.00`.
pub fn format_usd(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (integer, fraction) = rounded.split_once('.').unwrap_or((&rounded, "00"));
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}.{fraction}", group_thousands(integer))
}

/// Abbreviated month + day of month, no year, no time: `Jan 15`.
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_fraction_digits() {
        assert_eq!(format_usd(4.5), "$4.50");
        assert_eq!(format_usd(380.0), "$380.00");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_usd(1250.0), "$1,250.00");
        assert_eq!(format_usd(2084.80), "$2,084.80");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn negative_values_carry_a_leading_sign() {
        assert_eq!(format_usd(-67.5), "-$67.50");
    }

    #[test]
    fn short_dates_use_abbreviated_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_short_date(date), "Jan 15");
        let date = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
        assert_eq!(format_short_date(date), "Nov 3");
    }
}
