//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display.
//! Category references are resolved through a lookup that falls back to
//! "(unknown)" when the category no longer exists.

use std::collections::HashMap;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::models::{Category, CategoryId, Expense};

/// Format a list of expenses as a table
pub fn format_expense_table(
    expenses: &[Expense],
    categories: &[Category],
    settings: &Settings,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let names: HashMap<&CategoryId, &str> = categories
        .iter()
        .map(|c| (&c.id, c.name.as_str()))
        .collect();

    let mut output = String::new();
    output.push_str(&format!(
        "{:8}  {:16}  {:25}  {:15}  {:>12}\n",
        "ID", "Date", "Concept", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for expense in expenses {
        let category_name = names
            .get(&expense.category_id)
            .copied()
            .unwrap_or("(unknown)");

        output.push_str(&format!(
            "{:8}  {:16}  {:25}  {:15}  {:>12}\n",
            expense.id.short(),
            format_date(&expense.date, &settings.date_format),
            truncate(&expense.concept, 25),
            truncate(category_name, 15),
            expense
                .amount
                .format_with_symbol(&settings.currency_symbol)
        ));
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(
    expense: &Expense,
    category_name: Option<&str>,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!(
        "Date:     {}\n",
        format_date(&expense.date, &settings.date_format)
    ));
    output.push_str(&format!("Concept:  {}\n", expense.concept));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense
            .amount
            .format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "Category: {}\n",
        category_name.unwrap_or("(unknown)")
    ));

    output
}

/// Format a timestamp with the configured strftime format
///
/// A format string with invalid specifiers would make chrono's formatter
/// fail mid-write, so bad configs fall back to the default format instead.
fn format_date(date: &DateTime<Utc>, fmt: &str) -> String {
    let items: Vec<Item> = StrftimeItems::new(fmt).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return date.format("%Y-%m-%d %H:%M").to_string();
    }
    date.format_with_items(items.into_iter()).to_string()
}

/// Truncate a string to a maximum display width
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewExpense};
    use chrono::TimeZone;

    fn sample_expense() -> Expense {
        let mut expense = Expense::new(NewExpense {
            concept: "Supermercado".to_string(),
            amount: Money::from_cents(4250),
            category_id: CategoryId::from("1"),
        });
        expense.date = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
        expense
    }

    #[test]
    fn test_format_expense_table() {
        let expenses = vec![sample_expense()];
        let categories = Category::seed_set();
        let settings = Settings::default();

        let output = format_expense_table(&expenses, &categories, &settings);
        assert!(output.contains("Supermercado"));
        assert!(output.contains("Comida"));
        assert!(output.contains("$42.50"));
        assert!(output.contains("2024-03-15 12:30"));
    }

    #[test]
    fn test_format_empty_table() {
        let output = format_expense_table(&[], &Category::seed_set(), &Settings::default());
        assert!(output.contains("No expenses found"));
    }

    #[test]
    fn test_dangling_category_shows_unknown() {
        let mut expense = sample_expense();
        expense.category_id = CategoryId::from("borrada");

        let output = format_expense_table(&[expense], &Category::seed_set(), &Settings::default());
        assert!(output.contains("(unknown)"));
    }

    #[test]
    fn test_format_expense_details() {
        let expense = sample_expense();
        let settings = Settings::default();

        let output = format_expense_details(&expense, Some("Comida"), &settings);
        assert!(output.contains(expense.id.as_str()));
        assert!(output.contains("Supermercado"));
        assert!(output.contains("Comida"));
        assert!(output.contains("$42.50"));
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
        assert_eq!(format_date(&date, "%Q nonsense"), "2024-03-15 12:30");
        assert_eq!(format_date(&date, "%d/%m/%Y"), "15/03/2024");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Corto", 10).trim(), "Corto");

        let result = truncate("Una descripción bastante larga", 10);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), 10);
    }

    #[test]
    fn test_truncate_accented_text() {
        let result = truncate("Educación continua y más cosas", 12);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), 12);
    }
}
