//! Plain-text rendering of the breakdown and transaction views.
//!
//! Functions here return strings; the command layer prints them. Category
//! colors come through as truecolor escapes and degrade to plain text when
//! color output is disabled.

use colored::Colorize;

use crate::currency::{format_short_date, format_usd};
use crate::domain::category::resolve;
use crate::domain::Expense;
use crate::ledger::SpendSummary;

const BAR_WIDTH: usize = 24;
const NAME_WIDTH: usize = 17;
const AMOUNT_WIDTH: usize = 10;

/// One line per fixed category: icon, name, relative spend bar, subtotal.
/// Zero-subtotal categories render with an empty bar.
pub fn breakdown_lines(summary: &SpendSummary) -> Vec<String> {
    summary
        .categories
        .iter()
        .map(|entry| {
            let category = resolve(entry.name);
            let (r, g, b) = category.rgb;
            let filled = summary.scaled_width(entry.total, BAR_WIDTH);
            let bar = format!(
                "{}{}",
                "█".repeat(filled).truecolor(r, g, b),
                " ".repeat(BAR_WIDTH - filled)
            );
            format!(
                "{} {:<NAME_WIDTH$}  {}  {:>AMOUNT_WIDTH$}",
                category.icon.to_string().truecolor(r, g, b),
                entry.name,
                bar,
                format_usd(entry.total),
            )
        })
        .collect()
}

pub fn total_line(summary: &SpendSummary) -> String {
    format!("Total Expenditure  {}", format_usd(summary.total_spent))
}

/// One line per record, newest first: icon, description, stored category
/// text, amount, short date, id prefix. Unrecognized categories keep their
/// stored text but borrow the fallback's icon and color.
pub fn transaction_lines(records: &[Expense]) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            let category = resolve(&record.category);
            let (r, g, b) = category.rgb;
            format!(
                "{} {:<24}  {:<NAME_WIDTH$}  {:>11}  {:<6}  [{}]",
                category.icon.to_string().truecolor(r, g, b),
                record.description,
                record.category,
                format!("−{}", format_usd(record.amount)),
                format_short_date(record.date),
                &record.id.to_string()[..8],
            )
        })
        .collect()
}
