//! Request payloads.

use serde::Deserialize;
use std::fmt;
use validator::Validate;

/// Registration request payload.
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// User email address. Format is checked after normalization.
    #[validate(length(min = 1, max = 255, message = "Email must be 1-255 characters"))]
    pub email: String,

    /// User password.
    /// The upper bound caps the CPU spent hashing a single request.
    #[validate(length(min = 1, max = 1024, message = "Password must be 1-1024 characters"))]
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Login request payload.
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// User email address.
    #[validate(length(min = 1, max = 255, message = "Email must be 1-255 characters"))]
    pub email: String,

    /// User password.
    #[validate(length(min = 1, max = 1024, message = "Password must be 1-1024 characters"))]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}
