//! Web API error types and their HTTP response conversions.
//!
//! Maps the engine's [`CmsError`] taxonomy onto status codes: missing
//! identity is 401, missing entities are 404, malformed payloads are 422,
//! and everything unexpected is a generic 500 whose detail stays in the
//! server log unless verbose errors are enabled.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::CmsError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal { detail: Option<String> },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Convert an engine error, logging internal detail server-side and only
    /// echoing it to the client when `verbose` is set.
    pub fn from_cms(err: CmsError, verbose: bool) -> Self {
        match err {
            CmsError::NotFound(entity) => Self::NotFound(entity.to_string()),
            CmsError::Validation(message) => Self::Validation(message),
            other => {
                error!(error = %other, "internal error while handling request");
                Self::Internal {
                    detail: verbose.then(|| other.to_string()),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),

            ApiError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} not found"),
            ),

            ApiError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                message.clone(),
            ),

            ApiError::Internal { detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                detail
                    .clone()
                    .unwrap_or_else(|| "Internal server error".to_string()),
            ),
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for web API operations.
pub type ApiResult<T> = Result<T, ApiError>;
