//! Service layer
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, audit logging, and cross-entity operations.

pub mod category;
pub mod expense;

pub use category::CategoryService;
pub use expense::ExpenseService;
