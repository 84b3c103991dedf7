//! Expense persistence boundary.
//!
//! This module defines the storage-facing abstraction the request handlers
//! depend on, without making any storage assumptions. Production wiring uses
//! the Postgres adapter; tests use the in-memory one.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryExpenseStore;
pub use postgres::PostgresExpenseStore;
pub use r#trait::{ExpenseStore, StoreError};
