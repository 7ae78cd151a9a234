//! Handler for the `/registration` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cadastro_core::registration::{register_form, RawFormValues};

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /registration
///
/// Validate a sign-up form. Returns 201 when every field of the chosen
/// registrant kind passes, otherwise 400 with the first failure.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RawFormValues>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(values) = payload?;

    let registered = register_form(&values, state.today())?;
    tracing::info!(kind = %registered.kind, "Registration accepted");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(registered.message)),
    ))
}
