//! Request and response models.

mod requests;
mod responses;

pub use requests::{LoginRequest, RegisterRequest};
pub use responses::{ProtectedResponse, RegisterResponse, TokenResponse, UserResponse};
