//! Business logic services.

mod auth_service;
pub mod validation;

pub use auth_service::AuthService;
pub use validation::{normalize_email, validate_email, EmailValidationError};
