//! Registration endpoint handler.
//!
//! POST /register - Create a new user account.

use crate::error::ApiAuthError;
use crate::models::{RegisterRequest, RegisterResponse};
use crate::services::AuthService;
use axum::{extract::rejection::JsonRejection, http::StatusCode, Extension, Json};
use std::sync::Arc;

/// Handle user registration.
///
/// # Errors
///
/// - 400 Bad Request: malformed body, blank name, invalid email, bad password length
/// - 409 Conflict: email already registered
pub async fn register_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiAuthError> {
    let Json(request) = payload?;

    let record = auth_service.register(request).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::new(&record))))
}
