//! Category model
//!
//! Categories are user-defined named buckets used to classify expenses.
//! Names are unique case-insensitively across the whole collection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Names of the seed categories created on first run, in order
pub const SEED_CATEGORY_NAMES: [&str; 6] = [
    "Comida",
    "Transporte",
    "Ocio",
    "Hogar",
    "Salud",
    "Educación",
];

/// A user-defined expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (unique case-insensitively)
    pub name: String,
}

impl Category {
    /// Create a new category with a fresh identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
        }
    }

    /// Check whether this category's name matches another, ignoring case
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }

    /// The fixed seed set used when no persisted category data exists
    ///
    /// Seed identifiers are the stable strings "1" through "6".
    pub fn seed_set() -> Vec<Category> {
        SEED_CATEGORY_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Category {
                id: CategoryId::from((i + 1).to_string()),
                name: (*name).to_string(),
            })
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Mascotas");
        assert_eq!(category.name, "Mascotas");
        assert!(!category.id.as_str().is_empty());
    }

    #[test]
    fn test_new_categories_get_unique_ids() {
        let a = Category::new("Uno");
        let b = Category::new("Dos");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let category = Category::new("Comida");
        assert!(category.name_matches("comida"));
        assert!(category.name_matches("COMIDA"));
        assert!(category.name_matches("Comida"));
        assert!(!category.name_matches("Transporte"));
    }

    #[test]
    fn test_name_matches_handles_accents() {
        let category = Category::new("Educación");
        assert!(category.name_matches("EDUCACIÓN"));
        assert!(category.name_matches("educación"));
    }

    #[test]
    fn test_seed_set() {
        let seeds = Category::seed_set();
        assert_eq!(seeds.len(), 6);
        assert_eq!(seeds[0].id, CategoryId::from("1"));
        assert_eq!(seeds[0].name, "Comida");
        assert_eq!(seeds[5].id, CategoryId::from("6"));
        assert_eq!(seeds[5].name, "Educación");
    }

    #[test]
    fn test_serialization() {
        let category = Category::new("Viajes");
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
    }
}
