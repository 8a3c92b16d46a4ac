//! Storage layer
//!
//! Provides JSON file storage with atomic writes and automatic
//! directory creation. The `Storage` coordinator also owns the audit
//! log, so every mutation funnels through one place.

pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, read_json_or, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::GastosPaths;
use crate::error::GastosError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: GastosPaths,
    audit: AuditLogger,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: GastosPaths) -> Result<Self, GastosError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &GastosPaths {
        &self.paths
    }

    /// Get the audit logger for reading entries back
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), GastosError> {
        self.expenses.load()?;
        self.categories.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), GastosError> {
        self.expenses.save()?;
        self.categories.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), GastosError> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record an update operation in the audit log, with a field-level diff
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), GastosError> {
        let before_value = serde_json::to_value(before)
            .map_err(|e| GastosError::Json(format!("Failed to serialize audit entry: {}", e)))?;
        let after_value = serde_json::to_value(after)
            .map_err(|e| GastosError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        let diff = generate_diff(&before_value, &after_value);
        let entry = AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            &before_value,
            &after_value,
            diff,
        );
        self.audit.log(&entry)
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
        diff_summary: Option<String>,
    ) -> Result<(), GastosError> {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, entity, diff_summary);
        self.audit.log(&entry)
    }
}
