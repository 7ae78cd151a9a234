//! Shared response body types for API handlers.
//!
//! Successful registrations and most errors answer with a bare
//! `{ "message": ... }` object; field rule failures reuse
//! [`cadastro_core::rules::ValidationResult`] so the client also gets
//! `isValid: false`.

use serde::Serialize;

/// Standard `{ "message": ... }` response body.
///
/// # Example
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(MessageResponse::new(registered.message))))
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
