//! Error types for credential and token operations.
//!
//! Provides explicit error variants for every failure of the Credential
//! Manager and the Token Authority.

use passgate_core::PassgateError;
use thiserror::Error;

/// Authentication error types.
///
/// Each variant maps to a specific failure mode. Token variants are what a
/// verifier logs; callers outside this crate only ever see the coarser
/// [`PassgateError`] they convert into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    // Token errors
    /// Token has expired (current time is at or past `exp`).
    #[error("Token has expired")]
    TokenExpired,

    /// Token signature does not match the signing secret.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token format or payload is malformed.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token header names an algorithm other than HS256.
    #[error("Unsupported algorithm: only HS256 is allowed")]
    InvalidAlgorithm,

    /// Required claim is missing from the token.
    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    /// The signing primitive failed while producing a token.
    #[error("Token signing failed: {0}")]
    SigningFailed(String),

    /// Token lifetime must be positive and no longer than `MAX_TOKEN_TTL_SECS`.
    #[error("Token lifetime must be between 1 second and 366 days")]
    InvalidTtl,

    // Password errors
    /// Registration attempted with an empty password.
    #[error("Password must not be empty")]
    EmptyPassword,

    /// Password hashing operation failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored password hash could not be parsed.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

impl AuthError {
    /// Check if this error indicates an expired token.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::TokenExpired)
    }

    /// Check if this error indicates an invalid signature.
    #[must_use]
    pub fn is_invalid_signature(&self) -> bool {
        matches!(self, AuthError::InvalidSignature)
    }

    /// Check if this error is a rejection of a presented token.
    #[must_use]
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            AuthError::TokenExpired
                | AuthError::InvalidSignature
                | AuthError::InvalidToken(_)
                | AuthError::InvalidAlgorithm
                | AuthError::MissingClaim(_)
        )
    }

    /// Check if this error is related to password operations.
    #[must_use]
    pub fn is_password_error(&self) -> bool {
        matches!(
            self,
            AuthError::EmptyPassword | AuthError::HashingFailed(_) | AuthError::InvalidHashFormat
        )
    }

    /// Check if this error is an environment problem rather than bad input.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AuthError::SigningFailed(_)
                | AuthError::InvalidTtl
                | AuthError::HashingFailed(_)
                | AuthError::InvalidHashFormat
        )
    }
}

impl From<AuthError> for PassgateError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::EmptyPassword => {
                PassgateError::validation("password", "must not be empty")
            }
            e if e.is_token_error() => PassgateError::Forbidden,
            e => PassgateError::internal(e.to_string()),
        }
    }
}
