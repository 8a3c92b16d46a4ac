//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing, and editing expenses.
//! Input validation happens here; the service layer trusts its inputs.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_table};
use crate::error::{GastosError, GastosResult};
use crate::models::{Money, NewExpense};
use crate::services::{CategoryService, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        concept: String,
        /// Amount (e.g., "10.50" or "10")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
    },

    /// List expenses in the order they were recorded
    List {
        /// Filter by category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Show only the most recent N expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show expense details
    Show {
        /// Expense ID (full or unique prefix)
        id: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID (full or unique prefix)
        id: String,
        /// New concept
        #[arg(long)]
        concept: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> GastosResult<()> {
    let service = ExpenseService::new(storage);
    let category_service = CategoryService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            concept,
            amount,
            category,
        } => {
            let concept = concept.trim().to_string();
            if concept.is_empty() {
                return Err(GastosError::Validation("Concept cannot be empty".into()));
            }

            let amount = Money::parse(&amount).map_err(|e| {
                GastosError::Validation(format!("{}. Use a format like '10.50' or '10'", e))
            })?;

            let category = category_service
                .find(&category)?
                .ok_or_else(|| GastosError::category_not_found(&category))?;

            let expense = service.add(NewExpense {
                concept,
                amount,
                category_id: category.id.clone(),
            })?;

            println!("Recorded expense:");
            println!("  ID:       {}", expense.id.short());
            println!("  Concept:  {}", expense.concept);
            println!(
                "  Amount:   {}",
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Category: {}", category.name);
        }

        ExpenseCommands::List { category, limit } => {
            let mut expenses = if let Some(cat_name) = &category {
                let cat = category_service
                    .find(cat_name)?
                    .ok_or_else(|| GastosError::category_not_found(cat_name))?;
                service.list_by_category(&cat.id)?
            } else {
                service.list()?
            };

            if let Some(limit) = limit {
                let skip = expenses.len().saturating_sub(limit);
                expenses.drain(..skip);
            }

            let categories = category_service.list()?;
            print!("{}", format_expense_table(&expenses, &categories, settings));

            if !expenses.is_empty() {
                println!("\nShowing {} expense(s)", expenses.len());
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = service
                .find(&id)?
                .ok_or_else(|| GastosError::expense_not_found(&id))?;

            let category_name = category_service
                .get(&expense.category_id)?
                .map(|c| c.name);

            print!(
                "{}",
                format_expense_details(&expense, category_name.as_deref(), settings)
            );
        }

        ExpenseCommands::Edit {
            id,
            concept,
            amount,
            category,
        } => {
            let existing = service
                .find(&id)?
                .ok_or_else(|| GastosError::expense_not_found(&id))?;

            if concept.is_none() && amount.is_none() && category.is_none() {
                println!("No changes specified. Use --concept, --amount, or --category.");
                return Ok(());
            }

            // Build the replacement, keeping the identifier and timestamp
            let mut replacement = existing.clone();

            if let Some(new_concept) = concept {
                let new_concept = new_concept.trim().to_string();
                if new_concept.is_empty() {
                    return Err(GastosError::Validation("Concept cannot be empty".into()));
                }
                replacement.concept = new_concept;
            }

            if let Some(amount_str) = amount {
                replacement.amount = Money::parse(&amount_str).map_err(|e| {
                    GastosError::Validation(format!("{}. Use a format like '10.50' or '10'", e))
                })?;
            }

            if let Some(cat_name) = category {
                let cat = category_service
                    .find(&cat_name)?
                    .ok_or_else(|| GastosError::category_not_found(&cat_name))?;
                replacement.category_id = cat.id;
            }

            if service.edit(replacement.clone())? {
                let category_name = category_service
                    .get(&replacement.category_id)?
                    .map(|c| c.name);

                println!("Updated expense:");
                print!(
                    "{}",
                    format_expense_details(&replacement, category_name.as_deref(), settings)
                );
            } else {
                println!("Expense '{}' no longer exists; nothing changed.", id);
            }
        }
    }

    Ok(())
}
