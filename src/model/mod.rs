//! Data model for the expense store.

mod amount;
mod category;
mod expense;

pub use amount::{format_total, Amount};
pub use category::{Category, PLACEHOLDER_IMAGE};
pub use expense::Expense;
