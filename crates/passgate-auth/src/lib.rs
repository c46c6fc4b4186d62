//! Password hashing and token issuance for passgate.
//!
//! This crate provides:
//! - Argon2id password hashing with OWASP-recommended parameters
//! - HS256 JWT issuance and verification with a configurable lifetime
//! - Bearer header handling for protected operations
//!
//! Everything here is stateless and performs no I/O.
//!
//! # Example
//!
//! ```rust
//! use chrono::Duration;
//! use passgate_auth::{authorize, PasswordHasher, SigningSecret, TokenAuthority};
//! use passgate_core::UserId;
//!
//! let hasher = PasswordHasher::with_params(4096, 1, 1).unwrap();
//! let hash = hasher.hash("hunter2").unwrap();
//! assert!(hasher.verify("hunter2", &hash).unwrap());
//!
//! let authority = TokenAuthority::new(
//!     SigningSecret::from("a-development-secret-of-32-bytes!"),
//!     Duration::hours(1),
//! )
//! .unwrap();
//! let issued = authority.issue(UserId::new()).unwrap();
//!
//! let header = format!("Bearer {}", issued.token);
//! assert!(authorize(Some(&header), &authority).is_ok());
//! ```

mod claims;
mod error;
mod gate;
mod jwt;
mod password;
mod secret;

// Re-export public API
pub use claims::{TokenClaims, TokenClaimsBuilder, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS};
pub use error::AuthError;
pub use gate::{authorize, extract_bearer, AccessDenied, BearerCredential};
pub use jwt::{
    decode_token, decode_token_with_config, encode_token, issue_token, IssuedToken,
    TokenAuthority, ValidationConfig,
};
pub use password::{hash_password, verify_password, PasswordHasher};
pub use secret::SigningSecret;
