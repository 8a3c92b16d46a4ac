//! Expense service
//!
//! Provides business logic for recording and editing expenses. Input
//! validation (parsing amounts, resolving category names) belongs to the
//! CLI layer; these operations take already-validated values.

use crate::audit::EntityType;
use crate::error::{GastosError, GastosResult};
use crate::models::{CategoryId, Expense, ExpenseId, NewExpense};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    ///
    /// Assigns a fresh identifier and the current timestamp, then appends
    /// the expense at the end of the collection.
    pub fn add(&self, input: NewExpense) -> GastosResult<Expense> {
        let expense = Expense::new(input);

        self.storage.expenses.append(expense.clone())?;
        self.storage.expenses.save()?;

        // Audit log
        self.storage.log_create(
            EntityType::Expense,
            expense.id.as_str(),
            Some(expense.concept.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Replace an expense in place
    ///
    /// Returns true when an expense with a matching identifier was replaced.
    /// An unknown identifier is not an error: the collection is left
    /// untouched and false is returned.
    pub fn edit(&self, expense: Expense) -> GastosResult<bool> {
        let before = match self.storage.expenses.get(&expense.id)? {
            Some(before) => before,
            None => return Ok(false),
        };

        self.storage.expenses.replace(expense.clone())?;
        self.storage.expenses.save()?;

        // Audit
        if before != expense {
            self.storage.log_update(
                EntityType::Expense,
                expense.id.as_str(),
                Some(expense.concept.clone()),
                &before,
                &expense,
            )?;
        }

        Ok(true)
    }

    /// Get an expense by ID
    pub fn get(&self, id: &ExpenseId) -> GastosResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by full ID or unique ID prefix
    ///
    /// Tables show abbreviated identifiers, so the prefix form is what users
    /// actually type. A prefix shared by several expenses is an error rather
    /// than a silent pick.
    pub fn find(&self, identifier: &str) -> GastosResult<Option<Expense>> {
        if let Some(expense) = self.storage.expenses.get(&ExpenseId::from(identifier))? {
            return Ok(Some(expense));
        }

        let matches: Vec<Expense> = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| e.id.as_str().starts_with(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            n => Err(GastosError::Validation(format!(
                "Expense ID prefix '{}' is ambiguous ({} matches)",
                identifier, n
            ))),
        }
    }

    /// List all expenses in the order they were recorded
    pub fn list(&self) -> GastosResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// List the expenses belonging to a category
    pub fn list_by_category(&self, category_id: &CategoryId) -> GastosResult<Vec<Expense>> {
        self.storage.expenses.get_by_category(category_id)
    }

    /// Count all expenses
    pub fn count(&self) -> GastosResult<usize> {
        self.storage.expenses.count()
    }
}
