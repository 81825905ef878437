//! Domain type for one committed expense entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// A single committed expense. Immutable once inserted into the ledger;
/// the id is assigned at creation and never reused after deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({})", self.description, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_fresh_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let a = Expense::new("Coffee", 4.5, "Food & Dining", date);
        let b = Expense::new("Coffee", 4.5, "Food & Dining", date);
        assert_ne!(a.id, b.id);
        assert_eq!(a.description, b.description);
    }

    #[test]
    fn display_label_names_the_category() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let expense = Expense::new("Opera Tickets", 380.0, "Entertainment", date);
        assert_eq!(expense.display_label(), "Opera Tickets (Entertainment)");
    }
}
