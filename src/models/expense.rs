//! Expense model
//!
//! An expense records a single purchase: what it was, how much it cost,
//! which category it belongs to, and when it was created. Once recorded,
//! an expense is never deleted, only edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A single recorded expense
///
/// Serialized field names use camelCase so the on-disk JSON reads
/// `categoryId` rather than `category_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub concept: String,

    /// Amount spent
    pub amount: Money,

    /// Category this expense belongs to
    pub category_id: CategoryId,

    /// Creation timestamp, fixed at recording time
    pub date: DateTime<Utc>,
}

/// Input for recording a new expense
///
/// The identifier and timestamp are assigned by [`Expense::new`], so
/// callers only supply the user-entered fields.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub concept: String,
    pub amount: Money,
    pub category_id: CategoryId,
}

impl Expense {
    /// Record a new expense with a fresh identifier and the current time
    pub fn new(input: NewExpense) -> Self {
        Self {
            id: ExpenseId::new(),
            concept: input.concept,
            amount: input.amount,
            category_id: input.category_id,
            date: Utc::now(),
        }
    }

    /// The expense's month bucket as "YYYY-MM", used for monthly grouping
    pub fn year_month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.concept, self.amount)
    }
}
