//! Password hashing with Argon2id.
//!
//! Provides salted one-way hashing and constant-time verification using
//! Argon2id with OWASP-recommended parameters.

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// OWASP 2024 memory cost in KiB (19 MiB).
const DEFAULT_MEMORY_KIB: u32 = 19456;
/// OWASP 2024 iteration count.
const DEFAULT_ITERATIONS: u32 = 2;
/// OWASP 2024 degree of parallelism.
const DEFAULT_PARALLELISM: u32 = 1;

/// Argon2id cost settings for new hashes.
///
/// `new()` follows the OWASP 2024 baseline (19 MiB, 2 passes, 1 lane).
/// Stored hashes record their own cost, so changing these settings never
/// breaks verification of older hashes.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Hasher with the OWASP baseline cost.
    #[must_use]
    pub fn new() -> Self {
        let params = Params::new(
            DEFAULT_MEMORY_KIB,
            DEFAULT_ITERATIONS,
            DEFAULT_PARALLELISM,
            None,
        )
        .unwrap_or_default();

        Self { params }
    }

    /// Hasher with an explicit cost. Tests use a small one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if parameters are invalid.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::HashingFailed(format!("Invalid parameters: {e}")))?;

        Ok(Self { params })
    }

    /// Salt and hash `password`, returning a PHC string
    /// (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`).
    ///
    /// # Errors
    ///
    /// - `AuthError::EmptyPassword` if `password` is empty
    /// - `AuthError::HashingFailed` if the primitive fails
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Check `password` against a stored PHC string. A mismatch is
    /// `Ok(false)`; the digest comparison is constant-time.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidHashFormat` if the hash cannot be parsed or
    /// names parameters the primitive does not support.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHashFormat)?;

        // Parameters come from the parsed hash, not from `self.params`.
        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(_) => Err(AuthError::InvalidHashFormat),
        }
    }
}

/// [`PasswordHasher::hash`] with the baseline cost.
///
/// ```rust
/// let hash = passgate_auth::hash_password("correct horse").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    PasswordHasher::new().hash(password)
}

/// [`PasswordHasher::verify`] for callers without a hasher at hand.
///
/// ```rust
/// use passgate_auth::{hash_password, verify_password};
///
/// let hash = hash_password("correct horse").unwrap();
/// assert!(verify_password("correct horse", &hash).unwrap());
/// assert!(!verify_password("battery staple", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    PasswordHasher::new().verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_params(4096, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_password_returns_argon2id() {
        let hash = hash_password("hunter2").unwrap();

        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_format_contains_params() {
        let hash = hash_password("test").unwrap();

        // $argon2id$v=19$m=19456,t=2,p=1$...
        assert!(hash.contains("v=19"));
        assert!(hash.contains("m=19456"));
        assert!(hash.contains("t=2"));
        assert!(hash.contains("p=1"));
    }

    #[test]
    fn test_verify_password_correct() {
        let hasher = fast_hasher();
        let hash = hasher.hash("correct-password").unwrap();

        assert!(hasher.verify("correct-password", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hasher = fast_hasher();
        let hash = hasher.hash("correct-password").unwrap();

        assert!(!hasher.verify("wrong-password", &hash).unwrap());
        assert!(!hasher.verify("", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_invalid_hash_format() {
        let result = fast_hasher().verify("password", "not-a-valid-hash");

        assert!(matches!(result.unwrap_err(), AuthError::InvalidHashFormat));
    }

    #[test]
    fn test_hash_is_unique() {
        let hasher = fast_hasher();
        let hash1 = hasher.hash("same-password").unwrap();
        let hash2 = hasher.hash("same-password").unwrap();

        // Different salts
        assert_ne!(hash1, hash2);

        assert!(hasher.verify("same-password", &hash1).unwrap());
        assert!(hasher.verify("same-password", &hash2).unwrap());
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = fast_hasher().hash("");

        assert!(matches!(result.unwrap_err(), AuthError::EmptyPassword));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let result = PasswordHasher::with_params(0, 0, 0);

        assert!(matches!(result.unwrap_err(), AuthError::HashingFailed(_)));
    }

    #[test]
    fn test_verify_uses_params_embedded_in_hash() {
        let old = fast_hasher();
        let hash = old.hash("hunter2").unwrap();
        assert!(hash.contains("m=4096"));

        // A hasher configured differently still verifies the old hash.
        let current = PasswordHasher::with_params(8192, 2, 1).unwrap();
        assert!(current.verify("hunter2", &hash).unwrap());
        assert!(!current.verify("hunter3", &hash).unwrap());
    }

    #[test]
    fn test_unicode_password() {
        let hasher = fast_hasher();
        let password = "пароль日本語🔐";
        let hash = hasher.hash(password).unwrap();

        assert!(hasher.verify(password, &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_long_password() {
        let hasher = fast_hasher();
        let password = "a".repeat(1024);
        let hash = hasher.hash(&password).unwrap();

        assert!(hasher.verify(&password, &hash).unwrap());
    }

    #[test]
    fn test_hash_does_not_contain_plaintext() {
        let hash = fast_hasher().hash("hunter2").unwrap();

        assert!(!hash.contains("hunter2"));
    }
}
