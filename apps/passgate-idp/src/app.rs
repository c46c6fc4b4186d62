//! Application assembly: services, routes and cross-cutting layers.

use crate::config::Config;
use crate::health::health_handler;
use axum::{routing::get, Router};
use passgate_api_auth::{auth_router, AuthService, AuthState, InMemoryUserStore};
use passgate_auth::{AuthError, PasswordHasher, TokenAuthority};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Build the full router from configuration.
///
/// # Errors
///
/// Returns `AuthError::InvalidTtl` if the configured lifetime is not positive
/// or exceeds `MAX_TOKEN_TTL_SECS`.
pub fn build_app(config: &Config) -> Result<Router, AuthError> {
    build_app_with_hasher(config, PasswordHasher::new())
}

/// Build the router with an explicit password hasher.
pub fn build_app_with_hasher(
    config: &Config,
    hasher: PasswordHasher,
) -> Result<Router, AuthError> {
    let authority = Arc::new(TokenAuthority::new(
        config.jwt_secret.clone(),
        config.token_ttl(),
    )?);
    let store = Arc::new(InMemoryUserStore::new());
    let auth_service = Arc::new(AuthService::new(store, hasher, authority)?);

    Ok(Router::new()
        .route("/health", get(health_handler))
        .merge(auth_router(AuthState::new(auth_service)))
        .layer(build_cors_layer(&config.cors_origins)))
}

/// Build CORS layer from configured origins.
///
/// A single `*` allows any origin without credentials. Otherwise only the
/// listed origins pass and rejections are logged.
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
    use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::AllowOrigin;

    let is_wildcard = origins.iter().any(|o| o == "*");

    let layer = CorsLayer::new().max_age(Duration::from_secs(3600));

    if is_wildcard {
        return layer
            .allow_origin(AllowOrigin::any())
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    let allow_origin = AllowOrigin::predicate(
        move |origin: &HeaderValue, _req: &axum::http::request::Parts| {
            let is_allowed = allowed.contains(origin);
            if !is_allowed {
                tracing::warn!(
                    target: "security",
                    event_type = "cors_rejected",
                    origin = %origin.to_str().unwrap_or("<non-utf8>"),
                    "CORS origin rejected"
                );
            }
            is_allowed
        },
    );

    layer
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT, ORIGIN])
        .allow_credentials(true)
}
