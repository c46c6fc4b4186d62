//! Error Types
//!
//! The caller-facing failure taxonomy shared by every passgate flow.
//! Routing layers map each variant to a response code; nothing below the
//! routing layer raises anything else across a crate boundary.
//!
//! # Example
//!
//! ```
//! use passgate_core::{PassgateError, Result};
//!
//! fn require_name(name: &str) -> Result<&str> {
//!     if name.trim().is_empty() {
//!         return Err(PassgateError::Validation {
//!             field: "name".to_string(),
//!             message: "must not be empty".to_string(),
//!         });
//!     }
//!     Ok(name)
//! }
//!
//! assert!(require_name(" ").is_err());
//! ```

use serde::Serialize;
use thiserror::Error;

/// Standardized error type for passgate.
///
/// # Variants
///
/// - `Validation` - malformed or missing input (HTTP 400)
/// - `InvalidCredentials` - wrong email/password, or unknown email (HTTP 400)
/// - `DuplicateIdentity` - email already registered (HTTP 409)
/// - `Unauthenticated` - no bearer credential presented (HTTP 401)
/// - `Forbidden` - credential presented but rejected (HTTP 403)
/// - `Internal` - hashing, signing or store failure (HTTP 500)
#[derive(Debug, Clone, Error, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PassgateError {
    /// Input validation failure.
    #[error("Validation error on field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Email/password combination rejected.
    ///
    /// Deliberately identical for "no such user" and "wrong password".
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that is already in use.
    #[error("Email is already registered")]
    DuplicateIdentity,

    /// No credential was presented for a protected operation.
    #[error("Authentication required")]
    Unauthenticated,

    /// A credential was presented but did not verify.
    ///
    /// Does not say whether the token was expired, tampered or malformed.
    #[error("Access denied")]
    Forbidden,

    /// An environment problem the caller cannot correct.
    #[error("Internal error: {message}")]
    Internal {
        /// Operator-facing detail; never sent to clients
        message: String,
    },
}

impl PassgateError {
    /// Shorthand for an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Shorthand for a `Validation` error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for every failure the caller caused.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }

    /// Stable machine-readable code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_failed",
            Self::InvalidCredentials => "invalid_credentials",
            Self::DuplicateIdentity => "duplicate_identity",
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden => "forbidden",
            Self::Internal { .. } => "internal_error",
        }
    }
}

/// Type alias for Results using `PassgateError`.
pub type Result<T> = std::result::Result<T, PassgateError>;
