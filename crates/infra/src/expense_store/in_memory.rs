use std::sync::RwLock;

use async_trait::async_trait;

use spendlog_core::{Expense, NewExpense};

use super::r#trait::{ExpenseStore, StoreError};

/// In-memory expense store.
///
/// Intended for tests/dev. Ids are assigned from a monotonically increasing
/// counter starting at 1; records are kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryExpenseStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    expenses: Vec<Expense>,
}

impl InMemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

#[async_trait]
impl ExpenseStore for InMemoryExpenseStore {
    async fn create(&self, expense: NewExpense) -> Result<Expense, StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.next_id += 1;
        let expense = Expense {
            id: inner.next_id,
            title: expense.title,
            amount: expense.amount,
            note: expense.note,
            tags: expense.tags,
        };
        inner.expenses.push(expense.clone());
        Ok(expense)
    }

    async fn get(&self, id: i64) -> Result<Expense, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        inner
            .expenses
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn replace(&self, expense: Expense) -> Result<Expense, StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        match inner.expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => {
                *slot = expense.clone();
                Ok(expense)
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn list(&self) -> Result<Vec<Expense>, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.expenses.clone())
    }
}
