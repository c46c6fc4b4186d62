//! Router configuration for the auth API.

use crate::handlers::{login_handler, me_handler, protected_handler, register_handler};
use crate::middleware::jwt_auth_middleware;
use crate::services::AuthService;
use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use passgate_auth::TokenAuthority;
use std::sync::Arc;

/// Shared state for the auth routes.
#[derive(Clone)]
pub struct AuthState {
    /// Registration and login flows.
    pub auth_service: Arc<AuthService>,
    /// Verifier used by the bearer middleware.
    pub token_authority: Arc<TokenAuthority>,
}

impl AuthState {
    /// Build state whose middleware verifies with the service's own authority.
    #[must_use]
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        let token_authority = Arc::clone(auth_service.token_authority());
        Self {
            auth_service,
            token_authority,
        }
    }
}

/// Create the auth router.
///
/// - `POST /register`
/// - `POST /login`
/// - `GET /api/protected` (bearer)
/// - `GET /api/me` (bearer)
pub fn auth_router(state: AuthState) -> Router {
    let protected_routes = Router::new()
        .route("/api/protected", get(protected_handler))
        .route("/api/me", get(me_handler))
        .layer(middleware::from_fn_with_state(
            state.token_authority,
            jwt_auth_middleware,
        ));

    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .merge(protected_routes)
        .layer(Extension(state.auth_service))
}
