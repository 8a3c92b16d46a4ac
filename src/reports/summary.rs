//! Spending summary
//!
//! Aggregates expenses into totals per category and per month. Totals are
//! exact sums over the stored amounts; only the percentage column uses
//! floating point.

use std::collections::{BTreeMap, HashMap};

use crate::error::GastosResult;
use crate::models::{CategoryId, Money};
use crate::storage::Storage;

/// Spending breakdown for a single category
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// Category ID
    pub category_id: CategoryId,
    /// Category name
    pub category_name: String,
    /// Total spent in this category
    pub total: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending breakdown for a single month
#[derive(Debug, Clone)]
pub struct MonthlyBreakdown {
    /// Month bucket as "YYYY-MM"
    pub month: String,
    /// Total spent in this month
    pub total: Money,
    /// Number of expenses
    pub expense_count: usize,
}

/// Spending summary
#[derive(Debug, Clone)]
pub struct SpendingSummary {
    /// Month filter the summary was generated for, if any
    pub month: Option<String>,
    /// Per-category breakdown, highest spending first
    pub categories: Vec<CategoryBreakdown>,
    /// Per-month breakdown, oldest first
    pub months: Vec<MonthlyBreakdown>,
    /// Total spending across all categories
    pub total: Money,
    /// Total expense count
    pub total_expenses: usize,
    /// Spending attached to categories that no longer exist
    pub unknown_total: Money,
    /// Expense count for categories that no longer exist
    pub unknown_count: usize,
}

impl SpendingSummary {
    /// Generate a summary over all recorded expenses
    pub fn generate(storage: &Storage) -> GastosResult<Self> {
        Self::build(storage, None)
    }

    /// Generate a summary restricted to one month ("YYYY-MM")
    pub fn generate_for_month(storage: &Storage, month: &str) -> GastosResult<Self> {
        Self::build(storage, Some(month))
    }

    fn build(storage: &Storage, month_filter: Option<&str>) -> GastosResult<Self> {
        let categories = storage.categories.get_all()?;
        let expenses: Vec<_> = storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| month_filter.map_or(true, |m| e.year_month() == m))
            .collect();

        // Aggregate per category and per month
        let mut per_category: HashMap<CategoryId, (Money, usize)> = HashMap::new();
        let mut per_month: BTreeMap<String, (Money, usize)> = BTreeMap::new();
        let mut total = Money::zero();

        for expense in &expenses {
            let entry = per_category
                .entry(expense.category_id.clone())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;

            let month_entry = per_month
                .entry(expense.year_month())
                .or_insert((Money::zero(), 0));
            month_entry.0 += expense.amount;
            month_entry.1 += 1;

            total += expense.amount;
        }

        // Walk the live categories so names resolve; whatever is left in the
        // map afterwards points at a deleted category
        let mut breakdown = Vec::new();
        for category in &categories {
            if let Some((spent, count)) = per_category.remove(&category.id) {
                breakdown.push(CategoryBreakdown {
                    category_id: category.id.clone(),
                    category_name: category.name.clone(),
                    total: spent,
                    expense_count: count,
                    percentage: percentage_of(spent, total),
                });
            }
        }

        let mut unknown_total = Money::zero();
        let mut unknown_count = 0;
        for (spent, count) in per_category.into_values() {
            unknown_total += spent;
            unknown_count += count;
        }

        // Highest spending first
        breakdown.sort_by(|a, b| b.total.cmp(&a.total));

        let months = per_month
            .into_iter()
            .map(|(month, (spent, count))| MonthlyBreakdown {
                month,
                total: spent,
                expense_count: count,
            })
            .collect();

        Ok(Self {
            month: month_filter.map(String::from),
            categories: breakdown,
            months,
            total,
            total_expenses: expenses.len(),
            unknown_total,
            unknown_count,
        })
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        // Header
        match &self.month {
            Some(month) => output.push_str(&format!("Spending Summary for {}\n", month)),
            None => output.push_str("Spending Summary (all time)\n"),
        }
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spending: {}\n",
            self.total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("Expenses Recorded: {}\n\n", self.total_expenses));

        if self.total_expenses == 0 {
            output.push_str("No expenses recorded yet.\n");
            return output;
        }

        // Column headers
        output.push_str(&format!(
            "{:<25} {:>12} {:>7} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<25} {:>12} {:>7} {:>7.1}%\n",
                category.category_name,
                category.total.format_with_symbol(currency_symbol),
                category.expense_count,
                category.percentage
            ));
        }

        if self.unknown_count > 0 {
            output.push_str(&format!(
                "{:<25} {:>12} {:>7} {:>7.1}%\n",
                "(unknown)",
                self.unknown_total.format_with_symbol(currency_symbol),
                self.unknown_count,
                percentage_of(self.unknown_total, self.total)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<25} {:>12} {:>7}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol),
            self.total_expenses
        ));

        // Month-by-month, only meaningful without a month filter
        if self.month.is_none() && self.months.len() > 1 {
            output.push_str("\nBy Month\n");
            for month in &self.months {
                output.push_str(&format!(
                    "{:<10} {:>12} {:>7}\n",
                    month.month,
                    month.total.format_with_symbol(currency_symbol),
                    month.expense_count
                ));
            }
        }

        output
    }
}

fn percentage_of(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        (part.cents() as f64 / total.cents() as f64) * 100.0
    }
}
