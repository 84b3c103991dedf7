//! Dependency wiring for the request handlers.

use std::sync::Arc;

use spendlog_infra::{ExpenseStore, InMemoryExpenseStore, PostgresExpenseStore};

/// Handles to the collaborators the request handlers depend on.
pub struct AppServices {
    expenses: Arc<dyn ExpenseStore>,
}

impl AppServices {
    pub fn new(expenses: Arc<dyn ExpenseStore>) -> Self {
        Self { expenses }
    }

    /// Production wiring: Postgres-backed store.
    pub async fn postgres(database_url: &str) -> anyhow::Result<Self> {
        let store = PostgresExpenseStore::connect(database_url).await?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Test/dev wiring: everything in memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryExpenseStore::new()))
    }

    pub fn expenses(&self) -> &dyn ExpenseStore {
        self.expenses.as_ref()
    }
}
