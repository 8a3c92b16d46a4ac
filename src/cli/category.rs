//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::{GastosError, GastosResult};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their expense counts
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
    },

    /// Rename a category
    Rename {
        /// Category name or ID
        category: String,
        /// New name
        name: String,
    },

    /// Delete a category
    ///
    /// A category that still has expenses attached can only be deleted
    /// when --reassign-to names a surviving category for them.
    Delete {
        /// Category name or ID
        category: String,
        /// Category to move the attached expenses to (name or ID)
        #[arg(long)]
        reassign_to: Option<String>,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> GastosResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;

            let mut rows = Vec::with_capacity(categories.len());
            for category in categories {
                let count = service.expense_count(&category.id)?;
                rows.push((category, count));
            }

            print!("{}", format_category_list(&rows));
        }

        CategoryCommands::Add { name } => {
            let category = service.add(&name)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Rename { category, name } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| GastosError::category_not_found(&category))?;

            let updated = service.rename(&cat.id, &name)?;
            println!("Renamed category '{}' to '{}'", cat.name, updated.name);
        }

        CategoryCommands::Delete {
            category,
            reassign_to,
        } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| GastosError::category_not_found(&category))?;

            let target = match reassign_to {
                Some(target_name) => Some(
                    service
                        .find(&target_name)?
                        .ok_or_else(|| GastosError::category_not_found(&target_name))?,
                ),
                None => None,
            };

            let moved = service.expense_count(&cat.id)?;
            let deleted = service.delete(&cat.id, target.as_ref().map(|c| &c.id))?;

            match target {
                Some(target) if moved > 0 => println!(
                    "Deleted category '{}'; {} expense(s) moved to '{}'",
                    deleted.name, moved, target.name
                ),
                _ => println!("Deleted category: {}", deleted.name),
            }
        }
    }

    Ok(())
}
