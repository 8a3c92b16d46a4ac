//! Category service
//!
//! Provides business logic for category management: creating, renaming,
//! and deleting categories while keeping every expense attached to a
//! category that exists.

use crate::audit::EntityType;
use crate::error::{GastosError, GastosResult};
use crate::models::{Category, CategoryId};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    ///
    /// The name is trimmed before validation. Names must be non-empty and
    /// unique ignoring case.
    pub fn add(&self, name: &str) -> GastosResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GastosError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        // Check for duplicate name
        if self.storage.categories.find_by_name(name)?.is_some() {
            return Err(GastosError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::new(name);

        self.storage.categories.append(category.clone())?;
        self.storage.categories.save()?;

        // Audit log
        self.storage.log_create(
            EntityType::Category,
            category.id.as_str(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }

    /// Rename a category
    ///
    /// The new name follows the same rules as creation, except the category
    /// may keep its own name (useful for changing only the casing).
    pub fn rename(&self, id: &CategoryId, new_name: &str) -> GastosResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| GastosError::category_not_found(id.as_str()))?;

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(GastosError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        // Check for duplicate, allowing the category to keep its own name
        if let Some(existing) = self.storage.categories.find_by_name(new_name)? {
            if existing.id != *id {
                return Err(GastosError::Duplicate {
                    entity_type: "Category",
                    identifier: new_name.to_string(),
                });
            }
        }

        let before = category.clone();
        category.name = new_name.to_string();

        self.storage.categories.replace(category.clone())?;
        self.storage.categories.save()?;

        // Audit
        if before.name != category.name {
            self.storage.log_update(
                EntityType::Category,
                category.id.as_str(),
                Some(category.name.clone()),
                &before,
                &category,
            )?;
        }

        Ok(category)
    }

    /// Delete a category
    ///
    /// A category with expenses attached can only be deleted when a reassign
    /// target is given; its expenses are moved there first so no expense is
    /// ever left pointing at a category that no longer exists. The target
    /// must exist and must not be the category being deleted.
    pub fn delete(
        &self,
        id: &CategoryId,
        reassign_to: Option<&CategoryId>,
    ) -> GastosResult<Category> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| GastosError::category_not_found(id.as_str()))?;

        let target = match reassign_to {
            Some(target_id) => {
                if target_id == id {
                    return Err(GastosError::Validation(
                        "Cannot reassign expenses to the category being deleted".into(),
                    ));
                }
                Some(
                    self.storage
                        .categories
                        .get(target_id)?
                        .ok_or_else(|| GastosError::category_not_found(target_id.as_str()))?,
                )
            }
            None => None,
        };

        let attached = self.storage.expenses.count_by_category(id)?;
        if attached > 0 && target.is_none() {
            return Err(GastosError::CategoryInUse {
                name: category.name.clone(),
                expense_count: attached,
            });
        }

        let mut reassign_note = None;
        if let Some(target) = &target {
            let moved = self.storage.expenses.reassign_category(id, &target.id)?;
            if moved > 0 {
                self.storage.expenses.save()?;
                reassign_note = Some(format!(
                    "reassigned {} expense(s) to '{}'",
                    moved, target.name
                ));
            }
        }

        self.storage.categories.remove(id)?;
        self.storage.categories.save()?;

        // Audit
        self.storage.log_delete(
            EntityType::Category,
            category.id.as_str(),
            Some(category.name.clone()),
            &category,
            reassign_note,
        )?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: &CategoryId) -> GastosResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> GastosResult<Option<Category>> {
        self.storage.categories.find_by_name(name)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> GastosResult<Option<Category>> {
        // Try by name first
        if let Some(category) = self.storage.categories.find_by_name(identifier)? {
            return Ok(Some(category));
        }

        // Fall back to ID lookup
        self.storage.categories.get(&CategoryId::from(identifier))
    }

    /// List all categories
    pub fn list(&self) -> GastosResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Count the expenses attached to a category
    pub fn expense_count(&self, id: &CategoryId) -> GastosResult<usize> {
        self.storage.expenses.count_by_category(id)
    }
}
