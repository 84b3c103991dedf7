use async_trait::async_trait;
use thiserror::Error;

use spendlog_core::{Expense, NewExpense};

/// Expense store operation error.
///
/// `NotFound` is the only variant callers branch on; everything else is an
/// opaque backend failure whose text must never reach a client.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("expense not found")]
    NotFound,

    #[error("backend failure: {0}")]
    Backend(String),
}

/// Persistence boundary for expense records.
///
/// Implementations assign `id` on create, guarantee its uniqueness, and
/// return records from `list` in primary-key (insertion) order.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Persist a new expense and return it with its assigned id.
    async fn create(&self, expense: NewExpense) -> Result<Expense, StoreError>;

    /// Fetch one expense by id.
    async fn get(&self, id: i64) -> Result<Expense, StoreError>;

    /// Replace the stored record carrying the same id as `expense`.
    async fn replace(&self, expense: Expense) -> Result<Expense, StoreError>;

    /// All expenses, in primary-key order.
    async fn list(&self) -> Result<Vec<Expense>, StoreError>;
}
