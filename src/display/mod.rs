//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod category;
pub mod expense;

pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_table};
