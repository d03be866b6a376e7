//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use egresos_core::CoreError;
use egresos_store::StoreError;
use serde::Serialize;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An error reported by the expense store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be read or is not the expected JSON.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The body parsed but failed local validation.
    #[error("invalid expense: {0}")]
    Validation(#[from] CoreError),

    /// Startup configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// JSON shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorBody {
    fn local(details: String) -> Self {
        Self {
            error: "invalid request body".to_owned(),
            hint: None,
            details: Some(details),
            code: None,
        }
    }
}

impl GatewayError {
    /// Status code this error is answered with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Store(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            GatewayError::Store(_) | GatewayError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidBody(_) | GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            GatewayError::Store(StoreError::Rejected {
                status: upstream,
                message,
                hint,
                details,
                code,
            }) => {
                tracing::warn!(upstream, %message, "store rejected request");
                ErrorBody { error: message, hint, details, code }
            }
            GatewayError::Store(other) => {
                tracing::warn!(error = %other, "store call failed");
                ErrorBody { error: other.to_string(), hint: None, details: None, code: None }
            }
            GatewayError::InvalidBody(details) => ErrorBody::local(details),
            GatewayError::Validation(e) => ErrorBody::local(e.to_string()),
            GatewayError::Config(reason) => {
                tracing::error!(%reason, "configuration error surfaced to a request");
                ErrorBody { error: reason, hint: None, details: None, code: None }
            }
        };
        (status, Json(body)).into_response()
    }
}
