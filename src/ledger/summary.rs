//! Derived spending aggregates, recomputed on demand.

use crate::domain::category::CATEGORIES;
use crate::domain::Expense;

/// Subtotal for one of the fixed categories.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub name: &'static str,
    pub total: f64,
}

/// Value snapshot of the aggregates over one observation of the store.
///
/// Always defined, including over an empty store (all totals zero).
#[derive(Debug, Clone, PartialEq)]
pub struct SpendSummary {
    pub total_spent: f64,
    /// One entry per fixed category, in table order; categories without a
    /// matching record carry a zero subtotal and still appear.
    pub categories: Vec<CategoryTotal>,
    pub max_category_total: f64,
}

impl SpendSummary {
    /// Pure function of the given records; nothing is cached or
    /// incrementally maintained.
    pub fn compute(records: &[Expense]) -> Self {
        let total_spent = records.iter().map(|record| record.amount).sum();

        let categories: Vec<CategoryTotal> = CATEGORIES
            .iter()
            .map(|category| CategoryTotal {
                name: category.name,
                total: records
                    .iter()
                    .filter(|record| record.category == category.name)
                    .map(|record| record.amount)
                    .sum(),
            })
            .collect();

        let max_category_total = categories
            .iter()
            .map(|entry| entry.total)
            .fold(0.0, f64::max);

        Self {
            total_spent,
            categories,
            max_category_total,
        }
    }

    /// Scales a subtotal to a bar width of at most `width` cells.
    ///
    /// A zero max collapses every bar to zero width instead of dividing
    /// by zero.
    pub fn scaled_width(&self, total: f64, width: usize) -> usize {
        if self.max_category_total <= 0.0 {
            return 0;
        }
        ((total / self.max_category_total) * width as f64).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(amount: f64, category: &str) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        Expense::new("sample", amount, category, date)
    }

    #[test]
    fn empty_store_yields_all_zero_totals() {
        let summary = SpendSummary::compute(&[]);
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.max_category_total, 0.0);
        assert_eq!(summary.categories.len(), 6);
        assert!(summary.categories.iter().all(|entry| entry.total == 0.0));
    }

    #[test]
    fn zero_subtotal_categories_still_report() {
        let records = vec![expense(12.0, "Transport")];
        let summary = SpendSummary::compute(&records);
        assert_eq!(summary.categories.len(), 6);
        let shopping = summary
            .categories
            .iter()
            .find(|entry| entry.name == "Shopping")
            .unwrap();
        assert_eq!(shopping.total, 0.0);
    }

    #[test]
    fn category_totals_sum_to_total_spent() {
        let records = vec![
            expense(10.0, "Transport"),
            expense(20.0, "Transport"),
            expense(5.5, "Shopping"),
            expense(1.25, "Other"),
        ];
        let summary = SpendSummary::compute(&records);
        let by_category: f64 = summary.categories.iter().map(|entry| entry.total).sum();
        assert!((by_category - summary.total_spent).abs() < 1e-9);
        assert!((summary.max_category_total - 30.0).abs() < 1e-9);
    }

    #[test]
    fn unrecognized_categories_count_toward_the_grand_total_only() {
        let records = vec![expense(7.0, "Transport"), expense(3.0, "Gifts")];
        let summary = SpendSummary::compute(&records);
        assert!((summary.total_spent - 10.0).abs() < 1e-9);
        let by_category: f64 = summary.categories.iter().map(|entry| entry.total).sum();
        assert!((by_category - 7.0).abs() < 1e-9);
    }

    #[test]
    fn scaled_width_handles_the_all_zero_case() {
        let summary = SpendSummary::compute(&[]);
        assert_eq!(summary.scaled_width(0.0, 24), 0);

        let records = vec![expense(50.0, "Transport"), expense(25.0, "Shopping")];
        let summary = SpendSummary::compute(&records);
        assert_eq!(summary.scaled_width(50.0, 24), 24);
        assert_eq!(summary.scaled_width(25.0, 24), 12);
        assert_eq!(summary.scaled_width(0.0, 24), 0);
    }
}
