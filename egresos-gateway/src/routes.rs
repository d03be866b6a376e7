//! Axum route handlers for the egresos API.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use egresos_core::{DeleteExpense, Expense, NewExpense};
use egresos_store::ExpenseStore;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::{body::JsonBody, cors::cors, error::GatewayError};

// ── Shared state ─────────────────────────────────────────────────────────────

type Store = Arc<dyn ExpenseStore>;

pub const EXPENSES_PATH: &str = "/api/egresos";
pub const HEALTH_PATH: &str = "/health";

/// Plain-text body of every 404.
pub const NOT_FOUND_BODY: &str = "Ruta no encontrada";

/// Confirmation message returned by a delete.
pub const DELETED_MESSAGE: &str = "Egreso eliminado";

// ── Response types ───────────────────────────────────────────────────────────

/// Body of a successful `DELETE /api/egresos`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    /// Rows the store removed; empty when the id matched nothing.
    pub data: Vec<Expense>,
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router over the given store.
///
/// Methods other than GET, POST and DELETE on the expenses path fall through
/// to the 404 handler rather than producing 405. HEAD is routed to the 404
/// handler explicitly because axum otherwise serves it from the GET handler.
pub fn create_router(store: Store) -> Router {
    Router::new()
        .route(
            EXPENSES_PATH,
            get(list_expenses)
                .head(not_found)
                .post(create_expense)
                .delete(delete_expense)
                .fallback(not_found),
        )
        .route(HEALTH_PATH, get(health).head(not_found).fallback(not_found))
        .fallback(not_found)
        .with_state(store)
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /api/egresos`: every stored expense.
///
/// # Errors
/// Returns [`GatewayError::Store`] if the store call fails.
pub async fn list_expenses(State(store): State<Store>) -> Result<impl IntoResponse, GatewayError> {
    let rows = store.select().await?;
    Ok(Json(rows))
}

/// `POST /api/egresos`: insert one expense and echo the stored row(s).
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] or [`GatewayError::Validation`] for
/// a bad payload, or [`GatewayError::Store`] if the insert fails.
pub async fn create_expense(
    State(store): State<Store>,
    JsonBody(body): JsonBody<NewExpense>,
) -> Result<impl IntoResponse, GatewayError> {
    body.validate()?;
    let rows = store.insert(body).await?;
    tracing::info!(table = store.table(), rows = rows.len(), "expense created");
    Ok((StatusCode::CREATED, Json(rows)))
}

/// `DELETE /api/egresos`: remove the expense named by the body's `id`.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] if the body has no integer `id`, or
/// [`GatewayError::Store`] if the delete fails.
pub async fn delete_expense(
    State(store): State<Store>,
    JsonBody(body): JsonBody<DeleteExpense>,
) -> Result<impl IntoResponse, GatewayError> {
    let data = store.delete(body.id).await?;
    tracing::info!(table = store.table(), id = %body.id, rows = data.len(), "expense deleted");
    Ok(Json(DeleteResponse { message: DELETED_MESSAGE, data }))
}

/// Fallback for unmatched paths and methods.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use egresos_store::MemoryStore;
    use tower::ServiceExt;

    fn test_store() -> Store {
        Arc::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let app = create_router(test_store());
        let req = match Request::builder().uri(HEALTH_PATH).body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        };
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn delete_response_serialization_has_message_and_data() {
        let resp = DeleteResponse { message: DELETED_MESSAGE, data: Vec::new() };
        let json = match serde_json::to_string(&resp) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"message":"Egreso eliminado","data":[]}"#);
    }
}
