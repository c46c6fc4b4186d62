//! Registration, login and protected-access flows.

use crate::models::{LoginRequest, RegisterRequest};
use crate::services::validation::{into_validation_error, normalize_email, validate_email};
use crate::store::{NewUser, StoreError, UserRecord, UserStore};
use passgate_auth::{AuthError, IssuedToken, PasswordHasher, TokenAuthority};
use passgate_core::{PassgateError, UserId};
use std::sync::Arc;
use validator::Validate;

/// Verified against when the email is unknown, so both login failure paths
/// spend the same hashing work.
const DUMMY_PASSWORD: &str = "passgate-dummy-password";

/// Authentication service.
pub struct AuthService {
    store: Arc<dyn UserStore>,
    password_hasher: PasswordHasher,
    token_authority: Arc<TokenAuthority>,
    dummy_hash: String,
}

impl AuthService {
    /// Create a new authentication service.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if the hasher cannot produce the
    /// placeholder hash used for unknown emails.
    pub fn new(
        store: Arc<dyn UserStore>,
        password_hasher: PasswordHasher,
        token_authority: Arc<TokenAuthority>,
    ) -> Result<Self, AuthError> {
        let dummy_hash = password_hasher.hash(DUMMY_PASSWORD)?;

        Ok(Self {
            store,
            password_hasher,
            token_authority,
            dummy_hash,
        })
    }

    /// The authority tokens are issued and verified with.
    #[must_use]
    pub fn token_authority(&self) -> &Arc<TokenAuthority> {
        &self.token_authority
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// - `Validation` for a blank name, malformed email or out-of-range password
    /// - `DuplicateIdentity` if the normalized email is taken
    /// - `Internal` if hashing or the store fails
    pub async fn register(&self, request: RegisterRequest) -> Result<UserRecord, PassgateError> {
        request
            .validate()
            .map_err(|e| into_validation_error(&e))?;

        let name = request.name.trim();
        if name.is_empty() {
            return Err(PassgateError::validation("name", "must not be blank"));
        }

        let email = normalize_email(&request.email);
        validate_email(&email).map_err(|e| PassgateError::validation("email", e.to_string()))?;

        let password_hash = self.password_hasher.hash(&request.password).map_err(|e| {
            if e.is_internal() {
                tracing::error!(error = %e, "Password hashing failed");
            }
            PassgateError::from(e)
        })?;

        let record = self
            .store
            .insert(NewUser {
                name: name.to_string(),
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::DuplicateEmail => {
                    tracing::debug!("Registration attempt with an existing email");
                    PassgateError::DuplicateIdentity
                }
                StoreError::Unavailable(reason) => {
                    tracing::error!(error = %reason, "User store insert failed");
                    PassgateError::internal(format!("User store unavailable: {reason}"))
                }
            })?;

        tracing::info!(user_id = %record.id, "User registered successfully");

        Ok(record)
    }

    /// Check a password against a user record, or against a placeholder when
    /// no user was found.
    ///
    /// # Errors
    ///
    /// - `InvalidCredentials` for an unknown user or wrong password
    /// - `Internal` if the stored hash is corrupt
    pub fn authenticate(
        &self,
        record: Option<&UserRecord>,
        password: &str,
    ) -> Result<UserId, PassgateError> {
        let hash = record.map_or(self.dummy_hash.as_str(), |r| r.password_hash.as_str());

        let valid = self.password_hasher.verify(password, hash).map_err(|e| {
            tracing::error!(error = %e, "Password verification error");
            PassgateError::internal(format!("Password verification failed: {e}"))
        })?;

        match record {
            Some(user) if valid => Ok(user.id),
            Some(user) => {
                tracing::debug!(user_id = %user.id, "Invalid password attempt");
                Err(PassgateError::InvalidCredentials)
            }
            None => {
                tracing::debug!("Login attempt for non-existent user");
                Err(PassgateError::InvalidCredentials)
            }
        }
    }

    /// Authenticate with email and password and issue a token.
    ///
    /// # Errors
    ///
    /// - `Validation` for an empty or oversized field
    /// - `InvalidCredentials` for an unknown email or wrong password
    /// - `Internal` if the store, hash verification or signing fails
    pub async fn login(&self, request: LoginRequest) -> Result<IssuedToken, PassgateError> {
        request
            .validate()
            .map_err(|e| into_validation_error(&e))?;

        let email = normalize_email(&request.email);
        let record = self.store.find_by_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, "User store lookup failed");
            PassgateError::internal(e.to_string())
        })?;

        let user_id = self.authenticate(record.as_ref(), &request.password)?;

        let issued = self.token_authority.issue(user_id).map_err(|e| {
            tracing::error!(error = %e, "Token issuance failed");
            PassgateError::internal(e.to_string())
        })?;

        tracing::info!(
            user_id = %user_id,
            jti = %issued.claims.jti,
            "User logged in successfully"
        );

        Ok(issued)
    }

    /// Load the user a verified token speaks for.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the user no longer exists
    /// - `Internal` if the store fails
    pub async fn current_user(&self, user_id: UserId) -> Result<UserRecord, PassgateError> {
        let record = self.store.find_by_id(user_id).await.map_err(|e| {
            tracing::error!(error = %e, "User store lookup failed");
            PassgateError::internal(e.to_string())
        })?;

        record.ok_or_else(|| {
            tracing::warn!(user_id = %user_id, "Valid token for unknown user");
            PassgateError::Forbidden
        })
    }
}
