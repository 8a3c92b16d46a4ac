//! Core domain models
//!
//! Data structures for expenses, categories, identifiers, and money.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, SEED_CATEGORY_NAMES};
pub use expense::{Expense, NewExpense};
pub use ids::{CategoryId, ExpenseId};
pub use money::{Money, MoneyParseError};
