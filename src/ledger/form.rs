//! Entry form: a transient draft plus the validation gate that commits it.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::category::default_draft_category;
use crate::domain::Expense;
use crate::ledger::ExpenseLedger;

/// Unvalidated input pending commit. Amount stays a raw string until the
/// submit gate parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: default_draft_category().to_string(),
        }
    }
}

/// The three editable draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Description,
    Amount,
    Category,
}

/// Why a submission was rejected. The form stays open in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("`{0}` is not a valid amount")]
    UnparsableAmount(String),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
}

/// Result of driving the submit gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A record was committed under this id; the draft was reset and the
    /// form closed.
    Committed(Uuid),
    /// Validation failed; store, draft, and open-state are unchanged.
    Rejected(DraftError),
}

/// Collects a draft and commits it into a ledger.
///
/// Holds the only mutable state outside the store itself: the open flag
/// and the current draft. Closing by any path discards the draft, so a
/// reopened form always starts from defaults.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    open: bool,
    draft: ExpenseDraft,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Flips the open state. Closing discards the draft.
    pub fn toggle(&mut self) {
        if self.open {
            self.cancel();
        } else {
            self.open = true;
        }
    }

    /// Discards the draft without validation and closes the form.
    pub fn cancel(&mut self) {
        self.draft = ExpenseDraft::default();
        self.open = false;
    }

    /// Replaces one draft field. Free text, no validation at edit time.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Description => self.draft.description = value,
            DraftField::Amount => self.draft.amount = value,
            DraftField::Category => self.draft.category = value,
        }
    }

    /// Validation gate. On success the committed record is prepended to
    /// `ledger`, the draft resets to defaults, and the form closes. On
    /// rejection nothing changes and the form stays open.
    ///
    /// `today` stamps the record's date; the clock stays at the caller's
    /// boundary.
    pub fn submit(&mut self, ledger: &mut ExpenseLedger, today: NaiveDate) -> SubmitOutcome {
        let amount = match self.validate() {
            Ok(amount) => amount,
            Err(reason) => return SubmitOutcome::Rejected(reason),
        };

        let expense = Expense::new(
            self.draft.description.trim(),
            amount,
            self.draft.category.clone(),
            today,
        );
        let id = expense.id;
        ledger.add_record(expense);

        self.draft = ExpenseDraft::default();
        self.open = false;
        SubmitOutcome::Committed(id)
    }

    fn validate(&self) -> Result<f64, DraftError> {
        if self.draft.description.trim().is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        let amount = self
            .draft
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| DraftError::UnparsableAmount(self.draft.amount.clone()))?;
        if amount <= 0.0 {
            return Err(DraftError::NonPositiveAmount);
        }
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn filled_form(description: &str, amount: &str, category: &str) -> EntryForm {
        let mut form = EntryForm::new();
        form.open();
        form.update_field(DraftField::Description, description);
        form.update_field(DraftField::Amount, amount);
        form.update_field(DraftField::Category, category);
        form
    }

    #[test]
    fn submit_commits_at_the_front_and_resets() {
        let mut ledger = ExpenseLedger::seeded();
        let mut form = filled_form("Coffee", "4.50", "Food & Dining");

        let outcome = form.submit(&mut ledger, today());
        let id = match outcome {
            SubmitOutcome::Committed(id) => id,
            SubmitOutcome::Rejected(reason) => panic!("unexpected rejection: {reason}"),
        };

        assert_eq!(ledger.len(), 6);
        let front = &ledger.records()[0];
        assert_eq!(front.id, id);
        assert_eq!(front.description, "Coffee");
        assert!((front.amount - 4.50).abs() < 1e-9);
        assert_eq!(front.date, today());

        assert!(!form.is_open());
        assert_eq!(form.draft(), &ExpenseDraft::default());
    }

    #[test]
    fn empty_description_is_rejected_in_place() {
        let mut ledger = ExpenseLedger::seeded();
        let mut form = filled_form("   ", "4.50", "Food & Dining");
        let draft_before = form.draft().clone();

        let outcome = form.submit(&mut ledger, today());
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(DraftError::EmptyDescription)
        );
        assert_eq!(ledger.len(), 5);
        assert!(form.is_open());
        assert_eq!(form.draft(), &draft_before);
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let mut ledger = ExpenseLedger::seeded();
        let mut form = filled_form("Coffee", "abc", "Food & Dining");

        let outcome = form.submit(&mut ledger, today());
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(DraftError::UnparsableAmount("abc".into()))
        );
        assert_eq!(ledger.len(), 5);
        assert!(form.is_open());
    }

    #[test]
    fn non_finite_and_non_positive_amounts_are_rejected() {
        let mut ledger = ExpenseLedger::new();

        let mut form = filled_form("Coffee", "NaN", "Food & Dining");
        assert!(matches!(
            form.submit(&mut ledger, today()),
            SubmitOutcome::Rejected(DraftError::UnparsableAmount(_))
        ));

        let mut form = filled_form("Coffee", "-3", "Food & Dining");
        assert_eq!(
            form.submit(&mut ledger, today()),
            SubmitOutcome::Rejected(DraftError::NonPositiveAmount)
        );

        let mut form = filled_form("Coffee", "0", "Food & Dining");
        assert_eq!(
            form.submit(&mut ledger, today()),
            SubmitOutcome::Rejected(DraftError::NonPositiveAmount)
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn unknown_categories_are_tolerated_at_commit_time() {
        let mut ledger = ExpenseLedger::new();
        let mut form = filled_form("Souvenir", "9.99", "Gifts");

        assert!(matches!(
            form.submit(&mut ledger, today()),
            SubmitOutcome::Committed(_)
        ));
        assert_eq!(ledger.records()[0].category, "Gifts");
    }

    #[test]
    fn cancel_discards_the_draft_and_closes() {
        let mut form = filled_form("Coffee", "4.50", "Transport");
        form.cancel();
        assert!(!form.is_open());
        assert_eq!(form.draft(), &ExpenseDraft::default());
    }

    #[test]
    fn toggle_reopens_with_default_draft() {
        let mut form = filled_form("Coffee", "4.50", "Transport");
        form.toggle();
        assert!(!form.is_open());
        form.toggle();
        assert!(form.is_open());
        assert_eq!(form.draft().category, "Food & Dining");
        assert!(form.draft().description.is_empty());
    }
}
