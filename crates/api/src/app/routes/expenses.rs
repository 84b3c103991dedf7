//! The expense resource: one handler per verb, each a linear
//! validate → store call → response-mapping pipeline.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use thiserror::Error;

use spendlog_core::validate;
use spendlog_infra::StoreError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Client-facing failure messages. The message text is the whole contract;
/// backend error details stay in the logs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("failed to create expense")]
    CreateFailed,

    #[error("invalid id")]
    InvalidId,

    #[error("id mismatch")]
    IdMismatch,

    #[error("expense not found")]
    NotFound,

    #[error("failed to get expense")]
    GetFailed,

    #[error("failed to update expense")]
    UpdateFailed,

    #[error("failed to list expenses")]
    ListFailed,
}

pub fn router() -> Router {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", get(get_expense).put(update))
}

pub async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateExpenseRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::error!(error = %rejection, "failed to read create request body");
            return errors::json_error(StatusCode::BAD_REQUEST, rejection);
        }
    };

    let expense = match body.into_new_expense() {
        Ok(expense) => expense,
        Err(field_errors) => {
            tracing::error!(errors = ?field_errors, "create request failed validation");
            return (
                StatusCode::BAD_REQUEST,
                Json(validate::error_map(&field_errors)),
            )
                .into_response();
        }
    };

    match services.expenses().create(expense).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to create expense");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, ExpenseError::CreateFailed)
        }
    }
}

pub async fn get_expense(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id: i64 = match id.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::error!(id = %id, "invalid expense id");
            return errors::json_error(StatusCode::BAD_REQUEST, ExpenseError::InvalidId);
        }
    };

    match services.expenses().get(id).await {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(StoreError::NotFound) => {
            tracing::error!(id, "expense not found");
            errors::json_error(StatusCode::NOT_FOUND, ExpenseError::NotFound)
        }
        Err(err) => {
            tracing::error!(id, error = %err, "failed to get expense");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, ExpenseError::GetFailed)
        }
    }
}

pub async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateExpenseRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::error!(error = %rejection, "failed to read update request body");
            return errors::json_error(StatusCode::BAD_REQUEST, rejection);
        }
    };

    let expense = match body.into_expense() {
        Ok(expense) => expense,
        Err(field_errors) => {
            tracing::error!(errors = ?field_errors, "update request failed validation");
            return (
                StatusCode::BAD_REQUEST,
                Json(validate::error_map(&field_errors)),
            )
                .into_response();
        }
    };

    let id: i64 = match id.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::error!(id = %id, "invalid expense id");
            return errors::json_error(StatusCode::BAD_REQUEST, ExpenseError::InvalidId);
        }
    };

    if expense.id != id {
        tracing::error!(path_id = id, body_id = expense.id, "id mismatch");
        return errors::json_error(StatusCode::BAD_REQUEST, ExpenseError::IdMismatch);
    }

    // Confirm the record exists before replacing it.
    match services.expenses().get(id).await {
        Ok(_) => {}
        Err(StoreError::NotFound) => {
            tracing::error!(id, "expense not found");
            return errors::json_error(StatusCode::NOT_FOUND, ExpenseError::NotFound);
        }
        Err(err) => {
            tracing::error!(id, error = %err, "failed to get expense");
            return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, ExpenseError::GetFailed);
        }
    }

    match services.expenses().replace(expense).await {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(err) => {
            tracing::error!(id, error = %err, "failed to update expense");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, ExpenseError::UpdateFailed)
        }
    }
}

pub async fn list(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.expenses().list().await {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list expenses");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, ExpenseError::ListFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use axum::body::to_bytes;

    use spendlog_core::{Expense, NewExpense};
    use spendlog_infra::ExpenseStore;

    /// Store stub where every operation fails with a backend error.
    struct FailingStore;

    #[async_trait]
    impl ExpenseStore for FailingStore {
        async fn create(&self, _expense: NewExpense) -> Result<Expense, StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }

        async fn get(&self, _id: i64) -> Result<Expense, StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }

        async fn replace(&self, _expense: Expense) -> Result<Expense, StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }

        async fn list(&self) -> Result<Vec<Expense>, StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }
    }

    /// Store stub where reads succeed but writes fail, to reach the replace
    /// branch of the update pipeline.
    struct ReadOnlyStore;

    #[async_trait]
    impl ExpenseStore for ReadOnlyStore {
        async fn create(&self, _expense: NewExpense) -> Result<Expense, StoreError> {
            Err(StoreError::Backend("read-only".to_string()))
        }

        async fn get(&self, id: i64) -> Result<Expense, StoreError> {
            Ok(Expense {
                id,
                title: "stored".to_string(),
                amount: 10.0,
                note: String::new(),
                tags: vec![],
            })
        }

        async fn replace(&self, _expense: Expense) -> Result<Expense, StoreError> {
            Err(StoreError::Backend("read-only".to_string()))
        }

        async fn list(&self) -> Result<Vec<Expense>, StoreError> {
            Ok(vec![])
        }
    }

    fn services(store: impl ExpenseStore + 'static) -> Extension<Arc<AppServices>> {
        Extension(Arc::new(AppServices::new(Arc::new(store))))
    }

    fn create_request() -> dto::CreateExpenseRequest {
        dto::CreateExpenseRequest {
            title: Some("coffee".to_string()),
            amount: Some(55.0),
            note: Some("with the team".to_string()),
            tags: Some(vec!["drink".to_string()]),
        }
    }

    fn update_request(id: i64) -> dto::UpdateExpenseRequest {
        dto::UpdateExpenseRequest {
            id: Some(id),
            title: Some("coffee".to_string()),
            amount: Some(55.0),
            note: Some("with the team".to_string()),
            tags: Some(vec!["drink".to_string()]),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_maps_store_failure_to_500() {
        let response = create(services(FailingStore), Ok(Json(create_request()))).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "failed to create expense"})
        );
    }

    #[tokio::test]
    async fn get_maps_store_failure_to_500() {
        let response = get_expense(services(FailingStore), Path("7".to_string())).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "failed to get expense"})
        );
    }

    #[tokio::test]
    async fn get_rejects_non_numeric_id() {
        let response = get_expense(services(FailingStore), Path("abc".to_string())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "invalid id"})
        );
    }

    #[tokio::test]
    async fn update_rejects_id_mismatch_before_touching_the_store() {
        let response = update(
            services(FailingStore),
            Path("1".to_string()),
            Ok(Json(update_request(2))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "id mismatch"})
        );
    }

    #[tokio::test]
    async fn update_maps_lookup_failure_to_500() {
        let response = update(
            services(FailingStore),
            Path("1".to_string()),
            Ok(Json(update_request(1))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "failed to get expense"})
        );
    }

    #[tokio::test]
    async fn update_maps_replace_failure_to_500() {
        let response = update(
            services(ReadOnlyStore),
            Path("1".to_string()),
            Ok(Json(update_request(1))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "failed to update expense"})
        );
    }

    #[tokio::test]
    async fn list_failure_uses_the_uniform_error_shape() {
        // The failure body goes through the same generic mapper as every
        // other error, not a bare sentinel value.
        let response = list(services(FailingStore)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "failed to list expenses"})
        );
    }
}
