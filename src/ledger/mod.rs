//! The mutable expense store and its derived views.

pub mod form;
pub mod summary;

pub use form::{DraftError, DraftField, EntryForm, ExpenseDraft, SubmitOutcome};
pub use summary::{CategoryTotal, SpendSummary};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::Expense;

/// Ordered store of committed expenses, newest first.
///
/// Owned by the caller and passed by reference to whatever drives it;
/// there is no process-wide instance. Records are immutable once inserted
/// and leave the store only through [`ExpenseLedger::remove_record`].
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    records: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger pre-populated with the five sample records shown on first
    /// launch.
    pub fn seeded() -> Self {
        let mut ledger = Self::new();
        for (description, amount, category, (year, month, day)) in SEED_RECORDS.iter().rev() {
            let date = NaiveDate::from_ymd_opt(*year, *month, *day).expect("valid seed date");
            ledger.add_record(Expense::new(*description, *amount, *category, date));
        }
        tracing::info!(records = ledger.len(), "Seeded ledger with sample data.");
        ledger
    }

    /// Current records, insertion order, newest first.
    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a committed record at the front of the store.
    pub fn add_record(&mut self, expense: Expense) {
        tracing::info!(id = %expense.id, amount = expense.amount, "Recording expense.");
        self.records.insert(0, expense);
    }

    /// Removes the record with the given id, returning it. `None` when no
    /// record matches; a miss is benign, not an error. Relative order of
    /// the remaining records is preserved.
    pub fn remove_record(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.records.iter().position(|record| record.id == id)?;
        let removed = self.records.remove(index);
        tracing::info!(id = %removed.id, "Removed expense.");
        Some(removed)
    }

    /// Recomputes the aggregate snapshot from the current records.
    ///
    /// Called explicitly after every mutation; the returned value is a
    /// fresh snapshot, never a live view, so it cannot go stale.
    pub fn recompute(&self) -> SpendSummary {
        SpendSummary::compute(&self.records)
    }
}

const SEED_RECORDS: [(&str, f64, &str, (i32, u32, u32)); 5] = [
    ("Dinner at Nobu", 245.00, "Food & Dining", (2024, 1, 15)),
    ("Uber Premium", 67.50, "Transport", (2024, 1, 14)),
    ("Electric Bill", 142.30, "Bills & Utilities", (2024, 1, 13)),
    ("Vintage Watch", 1250.00, "Shopping", (2024, 1, 12)),
    ("Opera Tickets", 380.00, "Entertainment", (2024, 1, 10)),
];
