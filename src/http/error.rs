//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::{BirthDataError, FieldError};
use crate::provider::ProviderError;
use crate::services::ServiceError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Field-level validation failures
    Validation(Vec<FieldError>),
    /// Invalid request for other reasons
    BadRequest(String),
    /// Resource not found
    NotFound(String),
    /// Internal server error; the message is logged, not returned
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Validation(fields) => {
                let details = fields
                    .iter()
                    .map(|f| format!("{}: {}", f.field, f.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("INVALID_BIRTH_DATA", "Invalid birth data provided")
                        .with_details(details),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_BIRTH_DATA", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("CHART_CALCULATION_FAILED", "Failed to calculate birth chart"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<BirthDataError> for AppError {
    fn from(err: BirthDataError) -> Self {
        match err {
            BirthDataError::Validation(fields) => AppError::Validation(fields),
            other => AppError::BadRequest(other.to_string()),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidInput(msg) => AppError::BadRequest(msg),
            ProviderError::Calculation(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Birth(e) => e.into(),
            ServiceError::Provider(e) => e.into(),
        }
    }
}
