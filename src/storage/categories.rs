//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json. When no file
//! exists yet, the repository starts from the seed set so a fresh install
//! has sensible categories to file expenses under. An existing file always
//! wins, even an empty one.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GastosError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json_or, write_json_atomic};

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk, falling back to the seed set
    ///
    /// The seed set is used only when the file is missing entirely. A user
    /// who deleted every category keeps an empty collection across restarts.
    pub fn load(&self) -> Result<(), GastosError> {
        let categories: Vec<Category> = read_json_or(&self.path, Category::seed_set)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = categories;
        Ok(())
    }

    /// Save categories to disk as a JSON array, preserving order
    pub fn save(&self) -> Result<(), GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Append a new category at the end of the collection
    pub fn append(&self, category: Category) -> Result<(), GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(category);
        Ok(())
    }

    /// Replace the category with a matching identifier, keeping its position
    pub fn replace(&self, category: Category) -> Result<bool, GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a category by ID
    pub fn remove(&self, id: &CategoryId) -> Result<bool, GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|c| &c.id != id);
        Ok(data.len() < before)
    }

    /// Get a category by ID
    pub fn get(&self, id: &CategoryId) -> Result<Option<Category>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|c| &c.id == id).cloned())
    }

    /// Get all categories in insertion order
    pub fn get_all(&self) -> Result<Vec<Category>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Find a category by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Result<Option<Category>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|c| c.name_matches(name)).cloned())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_missing_file_loads_seed_set() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert_eq!(repo.count().unwrap(), 6);
        let first = repo.get(&CategoryId::from("1")).unwrap().unwrap();
        assert_eq!(first.name, "Comida");
    }

    #[test]
    fn test_empty_file_stays_empty() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("categories.json"), "[]").unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_find_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(Category::new("Mascotas")).unwrap();

        let found = repo.find_by_name("mascotas").unwrap().unwrap();
        assert_eq!(found.name, "Mascotas");
        assert!(repo.find_by_name("MASCOTAS").unwrap().is_some());
        assert!(repo.find_by_name("Inexistente").unwrap().is_none());
    }

    #[test]
    fn test_replace() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut category = repo.get(&CategoryId::from("3")).unwrap().unwrap();
        category.name = "Entretenimiento".to_string();
        assert!(repo.replace(category).unwrap());

        let renamed = repo.get(&CategoryId::from("3")).unwrap().unwrap();
        assert_eq!(renamed.name, "Entretenimiento");
        assert_eq!(repo.count().unwrap(), 6);
    }

    #[test]
    fn test_replace_unknown_returns_false() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let stranger = Category::new("Fantasma");
        assert!(!repo.replace(stranger).unwrap());
        assert_eq!(repo.count().unwrap(), 6);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert!(repo.remove(&CategoryId::from("6")).unwrap());
        assert_eq!(repo.count().unwrap(), 5);
        assert!(repo.get(&CategoryId::from("6")).unwrap().is_none());

        assert!(!repo.remove(&CategoryId::from("6")).unwrap());
    }

    #[test]
    fn test_seed_set_persists_after_save() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("categories.json");
        assert!(path.exists());

        let repo2 = CategoryRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 6);
    }

    #[test]
    fn test_order_survives_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.append(Category::new("Mascotas")).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("categories.json");
        let repo2 = CategoryRepository::new(path);
        repo2.load().unwrap();

        let names: Vec<String> = repo2
            .get_all()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Comida",
                "Transporte",
                "Ocio",
                "Hogar",
                "Salud",
                "Educación",
                "Mascotas"
            ]
        );
    }
}
