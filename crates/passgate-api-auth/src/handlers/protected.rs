//! Handlers behind `jwt_auth_middleware`.

use crate::error::ApiAuthError;
use crate::models::{ProtectedResponse, UserResponse};
use crate::services::AuthService;
use axum::{Extension, Json};
use passgate_core::UserId;
use std::sync::Arc;

/// GET /api/protected - Confirm the caller holds a valid token.
pub async fn protected_handler(Extension(user_id): Extension<UserId>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse::new(user_id))
}

/// GET /api/me - Profile of the token's subject.
pub async fn me_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(user_id): Extension<UserId>,
) -> Result<Json<UserResponse>, ApiAuthError> {
    let record = auth_service.current_user(user_id).await?;

    Ok(Json(UserResponse::from(&record)))
}
