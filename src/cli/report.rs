//! CLI commands for reports and history
//!
//! Handles the statistics, history, and audit-log views. These are all
//! read-only projections over the stored collections.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::expense::format_expense_table;
use crate::error::{GastosError, GastosResult};
use crate::reports::SpendingSummary;
use crate::services::{CategoryService, ExpenseService};
use crate::storage::Storage;

/// Handle the stats command
pub fn handle_stats_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> GastosResult<()> {
    let summary = match month {
        Some(month) => {
            // Validate before filtering so a typo reads as an error, not
            // as an empty month
            if NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").is_err() {
                return Err(GastosError::Validation(format!(
                    "Invalid month format: '{}'. Use YYYY-MM (e.g., 2025-01)",
                    month
                )));
            }
            SpendingSummary::generate_for_month(storage, &month)?
        }
        None => SpendingSummary::generate(storage)?,
    };

    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Handle the history command
///
/// Prints expenses most recent first, the reverse of the stored order.
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    limit: usize,
) -> GastosResult<()> {
    let service = ExpenseService::new(storage);
    let category_service = CategoryService::new(storage);

    let mut expenses = service.list()?;
    expenses.reverse();
    expenses.truncate(limit);

    let categories = category_service.list()?;
    print!("{}", format_expense_table(&expenses, &categories, settings));

    if !expenses.is_empty() {
        println!("\nShowing {} expense(s), most recent first", expenses.len());
    }

    Ok(())
}

/// Handle the audit command
pub fn handle_audit_command(storage: &Storage, limit: usize) -> GastosResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    let total = storage.audit().entry_count()?;
    println!("\nShowing {} of {} audit entries", entries.len(), total);

    Ok(())
}
