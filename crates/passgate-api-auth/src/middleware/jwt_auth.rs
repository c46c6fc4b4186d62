//! JWT Authentication middleware.
//!
//! Runs the bearer gate on the `Authorization` header, then inserts
//! `TokenClaims` and `UserId` into request extensions.

use crate::error::ApiAuthError;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use passgate_auth::{authorize, AccessDenied, TokenAuthority};
use std::sync::Arc;

/// JWT authentication middleware.
///
/// - no header → 401
/// - any other rejection → 403
///
/// # Usage
///
/// ```rust,ignore
/// use axum::{middleware, routing::get, Router};
/// use passgate_api_auth::middleware::jwt_auth_middleware;
///
/// let router = Router::new()
///     .route("/api/protected", get(protected_handler))
///     .layer(middleware::from_fn_with_state(authority, jwt_auth_middleware));
/// ```
pub async fn jwt_auth_middleware(
    State(authority): State<Arc<TokenAuthority>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiAuthError> {
    let header = match request.headers().get(AUTHORIZATION) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(text) => Some(text),
            Err(_) => {
                tracing::debug!("Authorization header is not valid ASCII");
                return Err(AccessDenied::Forbidden.into());
            }
        },
    };

    let claims = authorize(header, &authority)?;

    request.extensions_mut().insert(claims.subject());
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
