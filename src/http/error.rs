use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::error::YgodeckError;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

impl AppError {
    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            body: json!({ "error": "Unauthorized" }),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: json!({ "error": msg.into() }),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": msg.into() }),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "error": msg.into() }),
        }
    }

    /// 500 with a `details` field, for the card routes whose contract
    /// includes one. `err` is logged in full either way.
    pub fn internal_with(msg: &str, err: &YgodeckError) -> Self {
        tracing::error!(error = %err, "{msg}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "error": msg, "details": err.to_string() }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<YgodeckError> for AppError {
    fn from(e: YgodeckError) -> Self {
        match &e {
            YgodeckError::Validation(msg) => AppError::bad_request(msg.clone()),
            YgodeckError::Unauthorized => AppError::unauthorized(),
            YgodeckError::NotFound(msg) => AppError::not_found(msg.clone()),
            // Everything else is an internal failure: full detail stays in
            // the server log, the client gets a generic message.
            _ => {
                tracing::error!(error = %e, "request failed");
                AppError::internal("Internal server error")
            }
        }
    }
}
