//! In-memory user store backed by concurrent maps.

use super::{NewUser, StoreError, UserRecord, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use passgate_core::UserId;

/// Process-local [`UserStore`] for development and tests.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    by_email: DashMap<String, UserRecord>,
    by_id: DashMap<UserId, UserRecord>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    /// True if no users are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        // The entry guard holds the shard lock across check and insert.
        match self.by_email.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateEmail),
            Entry::Vacant(slot) => {
                let record = UserRecord {
                    id: UserId::new(),
                    name: user.name,
                    email: user.email,
                    password_hash: user.password_hash,
                    created_at: Utc::now(),
                };
                self.by_id.insert(record.id, record.clone());
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.by_email.get(email).map(|r| r.value().clone()))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.by_id.get(&id).map(|r| r.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Ann".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let store = InMemoryUserStore::new();
        let before = Utc::now();

        let record = store.insert(new_user("ann@x.com")).await.unwrap();

        assert_eq!(record.email, "ann@x.com");
        assert!(record.created_at >= before);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_email_and_id() {
        let store = InMemoryUserStore::new();
        let record = store.insert(new_user("ann@x.com")).await.unwrap();

        let by_email = store.find_by_email("ann@x.com").await.unwrap();
        let by_id = store.find_by_id(record.id).await.unwrap();

        assert_eq!(by_email.as_ref(), Some(&record));
        assert_eq!(by_id.as_ref(), Some(&record));
    }

    #[tokio::test]
    async fn test_unknown_lookups_return_none() {
        let store = InMemoryUserStore::new();

        assert!(store.find_by_email("nobody@x.com").await.unwrap().is_none());
        assert!(store.find_by_id(UserId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = InMemoryUserStore::new();
        store.insert(new_user("ann@x.com")).await.unwrap();

        let result = store.insert(new_user("ann@x.com")).await;

        assert_eq!(result.unwrap_err(), StoreError::DuplicateEmail);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_inserts_one_wins() {
        let store = Arc::new(InMemoryUserStore::new());

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.insert(new_user("race@x.com")).await })
            })
            .collect();

        let mut successes = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_debug_redacts_hash() {
        let record = UserRecord {
            id: UserId::new(),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            created_at: Utc::now(),
        };

        let debug = format!("{record:?}");
        assert!(!debug.contains("argon2id"));
        assert!(debug.contains("[redacted]"));
        assert!(!format!("{:?}", new_user("a@x.com")).contains("placeholder"));
    }
}
