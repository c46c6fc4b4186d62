//! Login endpoint handler.
//!
//! POST /login - Authenticate user and issue a bearer token.

use crate::error::ApiAuthError;
use crate::models::{LoginRequest, TokenResponse};
use crate::services::AuthService;
use axum::{extract::rejection::JsonRejection, Extension, Json};
use std::sync::Arc;

/// Handle user login.
///
/// Unknown email and wrong password produce the same 400 response.
pub async fn login_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiAuthError> {
    let Json(request) = payload?;

    let issued = auth_service.login(request).await?;

    Ok(Json(TokenResponse::from(issued)))
}
