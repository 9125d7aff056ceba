use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single violated request constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),
    #[error("Route not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldError::new(field, message)])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": "Validation failed",
                    "details": details,
                })),
            )
                .into_response(),
            AppError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "error": "Route not found",
                    "path": path,
                })),
            )
                .into_response(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        AppError::invalid("body", value.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(value: QueryRejection) -> Self {
        AppError::invalid("query", value.body_text())
    }
}
