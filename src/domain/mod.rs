pub mod category;
pub mod common;
pub mod expense;

pub use category::{Category, FALLBACK_CATEGORY};
pub use common::{Displayable, Identifiable};
pub use expense::Expense;
