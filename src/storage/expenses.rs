//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. Expenses are kept
//! in insertion order, which doubles as chronological order since new
//! expenses are always appended.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GastosError;
use crate::models::{CategoryId, Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    ///
    /// A missing file yields an empty collection.
    pub fn load(&self) -> Result<(), GastosError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = expenses;
        Ok(())
    }

    /// Save expenses to disk as a JSON array, preserving order
    pub fn save(&self) -> Result<(), GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Append a new expense at the end of the collection
    pub fn append(&self, expense: Expense) -> Result<(), GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(expense);
        Ok(())
    }

    /// Replace the expense with a matching identifier, keeping its position
    ///
    /// Returns false when no expense has that identifier, leaving the
    /// collection untouched.
    pub fn replace(&self, expense: Expense) -> Result<bool, GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => {
                *slot = expense;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get an expense by ID
    pub fn get(&self, id: &ExpenseId) -> Result<Option<Expense>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|e| &e.id == id).cloned())
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get all expenses belonging to a category, in insertion order
    pub fn get_by_category(&self, category_id: &CategoryId) -> Result<Vec<Expense>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|e| &e.category_id == category_id)
            .cloned()
            .collect())
    }

    /// Count expenses belonging to a category
    pub fn count_by_category(&self, category_id: &CategoryId) -> Result<usize, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().filter(|e| &e.category_id == category_id).count())
    }

    /// Move every expense in one category to another
    ///
    /// Returns how many expenses were rewritten.
    pub fn reassign_category(
        &self,
        from: &CategoryId,
        to: &CategoryId,
    ) -> Result<usize, GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut moved = 0;
        for expense in data.iter_mut() {
            if &expense.category_id == from {
                expense.category_id = to.clone();
                moved += 1;
            }
        }
        Ok(moved)
    }

    /// Count expenses
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
    use crate::models::{Money, NewExpense};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_expense(concept: &str, cents: i64, category: &str) -> Expense {
        Expense::new(NewExpense {
            concept: concept.to_string(),
            amount: Money::from_cents(cents),
            category_id: CategoryId::from(category),
        })
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = sample_expense("Cine", 1200, "3");
        let id = expense.id.clone();

        repo.append(expense).unwrap();

        let retrieved = repo.get(&id).unwrap().unwrap();
        assert_eq!(retrieved.concept, "Cine");
        assert_eq!(retrieved.amount.cents(), 1200);
    }

    #[test]
    fn test_replace_existing() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = sample_expense("Cine", 1200, "3");
        let id = expense.id.clone();
        repo.append(expense.clone()).unwrap();

        let mut edited = expense;
        edited.concept = "Teatro".to_string();
        edited.amount = Money::from_cents(3500);

        assert!(repo.replace(edited).unwrap());

        let retrieved = repo.get(&id).unwrap().unwrap();
        assert_eq!(retrieved.concept, "Teatro");
        assert_eq!(retrieved.amount.cents(), 3500);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_replace_unknown_returns_false() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(sample_expense("Cine", 1200, "3")).unwrap();

        let stranger = sample_expense("Fantasma", 100, "3");
        assert!(!repo.replace(stranger).unwrap());

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].concept, "Cine");
    }

    #[test]
    fn test_insertion_order_survives_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(sample_expense("Primero", 100, "1")).unwrap();
        repo.append(sample_expense("Segundo", 200, "2")).unwrap();
        repo.append(sample_expense("Tercero", 300, "1")).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("expenses.json");
        let repo2 = ExpenseRepository::new(path);
        repo2.load().unwrap();

        let concepts: Vec<String> = repo2
            .get_all()
            .unwrap()
            .into_iter()
            .map(|e| e.concept)
            .collect();
        assert_eq!(concepts, vec!["Primero", "Segundo", "Tercero"]);
    }

    #[test]
    fn test_get_by_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(sample_expense("Pan", 150, "1")).unwrap();
        repo.append(sample_expense("Bus", 250, "2")).unwrap();
        repo.append(sample_expense("Leche", 120, "1")).unwrap();

        let food = repo.get_by_category(&CategoryId::from("1")).unwrap();
        assert_eq!(food.len(), 2);
        assert_eq!(food[0].concept, "Pan");
        assert_eq!(food[1].concept, "Leche");

        assert_eq!(repo.count_by_category(&CategoryId::from("2")).unwrap(), 1);
        assert_eq!(repo.count_by_category(&CategoryId::from("9")).unwrap(), 0);
    }

    #[test]
    fn test_reassign_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(sample_expense("Pan", 150, "1")).unwrap();
        repo.append(sample_expense("Bus", 250, "2")).unwrap();
        repo.append(sample_expense("Leche", 120, "1")).unwrap();

        let moved = repo
            .reassign_category(&CategoryId::from("1"), &CategoryId::from("5"))
            .unwrap();
        assert_eq!(moved, 2);

        assert_eq!(repo.count_by_category(&CategoryId::from("1")).unwrap(), 0);
        assert_eq!(repo.count_by_category(&CategoryId::from("5")).unwrap(), 2);
        assert_eq!(repo.count_by_category(&CategoryId::from("2")).unwrap(), 1);
    }

    #[test]
    fn test_saved_file_is_a_bare_array() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(sample_expense("Pan", 150, "1")).unwrap();
        repo.save().unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
    }
}
