//! Error types for the tracking API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the tracking API.
///
/// Routing lookup failures are deliberately not represented here: they are
/// absorbed inside the route fetcher by the straight-line fallback and never
/// reach a response.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Warehouse connectivity, credentials or query failure
    #[error("Database error: {0}")]
    DataSource(String),

    /// Requested entity has no matching rows
    #[error("{0}")]
    NotFound(String),

    /// Required configuration is missing at request time
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DataSource(_) | ApiError::Config(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the tracking API.
pub type Result<T> = std::result::Result<T, ApiError>;
