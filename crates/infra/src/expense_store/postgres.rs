//! Postgres-backed expense store.
//!
//! SQLx errors are folded into [`StoreError`] in one place
//! ([`map_sqlx_error`]): a `RowNotFound` from a single-row fetch becomes
//! `NotFound`, everything else becomes an opaque `Backend` failure.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use spendlog_core::{Expense, NewExpense};

use super::r#trait::{ExpenseStore, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id     BIGSERIAL PRIMARY KEY,
    title  TEXT NOT NULL,
    amount DOUBLE PRECISION NOT NULL,
    note   TEXT NOT NULL,
    tags   TEXT[] NOT NULL
)
"#;

const COLUMNS: &str = "id, title, amount, note, tags";

#[derive(Debug, Clone)]
pub struct PostgresExpenseStore {
    pool: PgPool,
}

impl PostgresExpenseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and make sure the `expenses` table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Idempotent table setup, run once at connect time.
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        tracing::debug!("expenses table ensured");
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct ExpenseRow {
    id: i64,
    title: String,
    amount: f64,
    note: String,
    tags: Vec<String>,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            amount: row.amount,
            note: row.note,
            tags: row.tags,
        }
    }
}

#[async_trait]
impl ExpenseStore for PostgresExpenseStore {
    async fn create(&self, expense: NewExpense) -> Result<Expense, StoreError> {
        let row: ExpenseRow = sqlx::query_as(&format!(
            "INSERT INTO expenses (title, amount, note, tags) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&expense.title)
        .bind(expense.amount)
        .bind(&expense.note)
        .bind(&expense.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn get(&self, id: i64) -> Result<Expense, StoreError> {
        let row: ExpenseRow =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM expenses WHERE id = $1"))
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn replace(&self, expense: Expense) -> Result<Expense, StoreError> {
        let row: ExpenseRow = sqlx::query_as(&format!(
            "UPDATE expenses SET title = $2, amount = $3, note = $4, tags = $5 \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(expense.id)
        .bind(&expense.title)
        .bind(expense.amount)
        .bind(&expense.note)
        .bind(&expense.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Expense>, StoreError> {
        let rows: Vec<ExpenseRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM expenses ORDER BY id ASC"))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        other => StoreError::Backend(other.to_string()),
    }
}
