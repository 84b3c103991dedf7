//! Infrastructure layer: persistence adapters for expense records.

pub mod expense_store;

pub use expense_store::{ExpenseStore, InMemoryExpenseStore, PostgresExpenseStore, StoreError};
