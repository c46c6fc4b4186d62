//! Response payloads.

use crate::store::UserRecord;
use chrono::{DateTime, Utc};
use passgate_auth::IssuedToken;
use passgate_core::UserId;
use serde::{Deserialize, Serialize};

/// Public view of a registered user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&UserRecord> for UserResponse {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            created_at: record.created_at,
        }
    }
}

/// `POST /register` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

impl RegisterResponse {
    #[must_use]
    pub fn new(record: &UserRecord) -> Self {
        Self {
            message: "User registered successfully".to_string(),
            user: UserResponse::from(record),
        }
    }
}

/// `POST /login` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Compact JWS bearer token.
    pub token: String,
    /// Always `"Bearer"`.
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            expires_at: issued.claims.expires_at(),
            token: issued.token,
            token_type: "Bearer".to_string(),
        }
    }
}

/// `GET /api/protected` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub user_id: UserId,
}

impl ProtectedResponse {
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            message: "This is a protected route!".to_string(),
            user_id,
        }
    }
}
