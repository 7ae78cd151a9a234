use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cadastro_core::error::CoreError;
use cadastro_core::rules::ValidationResult;

use crate::response::MessageResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for registration failures and adds a transport
/// variant for bodies that never reach the pipeline. Every variant is a
/// client error and maps to HTTP 400.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A registration failure from `cadastro_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be read as a JSON object.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::FieldInvalid { field, message }) => {
                tracing::debug!(%field, %message, "Field rule rejected registration");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationResult::invalid(message)),
                )
                    .into_response()
            }
            AppError::Core(err) => {
                tracing::debug!(error = %err, "Registration rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(MessageResponse::new(err.to_string())),
                )
                    .into_response()
            }
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Malformed registration body");
                (StatusCode::BAD_REQUEST, Json(MessageResponse::new(msg))).into_response()
            }
        }
    }
}
