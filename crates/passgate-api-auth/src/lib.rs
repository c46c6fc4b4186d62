//! Authentication API endpoints for passgate.
//!
//! This crate provides REST API endpoints for user authentication:
//! - Registration (POST /register)
//! - Login (POST /login)
//! - Protected access (GET /api/protected, GET /api/me)
//!
//! # Example
//!
//! ```rust,ignore
//! use passgate_api_auth::{auth_router, AuthService, AuthState, InMemoryUserStore};
//!
//! let service = AuthService::new(Arc::new(InMemoryUserStore::new()), hasher, authority)?;
//! let app = auth_router(AuthState::new(Arc::new(service)));
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod store;

// Re-export public API
pub use error::{ApiAuthError, ApiResult, ErrorResponse};
pub use middleware::jwt_auth_middleware;
pub use models::{
    LoginRequest, ProtectedResponse, RegisterRequest, RegisterResponse, TokenResponse,
    UserResponse,
};
pub use router::{auth_router, AuthState};
pub use services::{normalize_email, validate_email, AuthService};
pub use store::{InMemoryUserStore, NewUser, StoreError, UserRecord, UserStore};
