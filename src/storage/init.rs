//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::GastosPaths;
use crate::error::GastosError;
use crate::models::{Category, Expense};

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the seed categories and an empty expense collection. Existing
/// files are never overwritten, so re-running initialization is harmless.
pub fn initialize_storage(paths: &GastosPaths) -> Result<(), GastosError> {
    // Ensure all directories exist
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        write_json_atomic(paths.categories_file(), &Category::seed_set())?;
    }

    if !paths.expenses_file().exists() {
        write_json_atomic(paths.expenses_file(), &Vec::<Expense>::new())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &GastosPaths) -> bool {
    !paths.categories_file().exists()
}
