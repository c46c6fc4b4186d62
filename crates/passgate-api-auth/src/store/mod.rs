//! User store collaborator.
//!
//! The auth flows only need three operations from persistence: insert a new
//! user, look one up by email, look one up by id. Records are immutable once
//! inserted.

mod memory;

pub use memory::InMemoryUserStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use passgate_core::UserId;
use std::fmt;
use thiserror::Error;

/// A registered user as held by the store.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    /// Normalized (trimmed, lowercase) email.
    pub email: String,
    /// PHC-formatted Argon2id hash. Never serialized or logged.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[redacted]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Input to [`UserStore::insert`].
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[redacted]")
            .finish()
    }
}

/// User store failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Another user already holds this email.
    #[error("Email is already registered")]
    DuplicateEmail,

    /// The backing store could not be reached or failed.
    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence contract for registered users.
///
/// Emails are matched exactly; callers pass normalized emails.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user, assigning its id and creation time.
    ///
    /// The uniqueness check and the insert are one atomic step: of two
    /// concurrent inserts with the same email, exactly one succeeds.
    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    /// Find a user by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError>;
}
