//! Token claims.
//!
//! `TokenClaims` is the fixed payload of every issued token: the subject's
//! user id plus issue time, expiry and a unique token id.

use crate::error::AuthError;
use chrono::{DateTime, Duration, Utc};
use passgate_core::{TokenId, UserId};
use serde::{Deserialize, Serialize};

/// Lifetime applied by the builder when no expiry is given.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Longest lifetime a token may be issued with (366 days).
pub const MAX_TOKEN_TTL_SECS: i64 = 366 * 24 * 60 * 60;

/// Claims carried by a passgate token.
///
/// # Claims (RFC 7519)
///
/// - `sub`: Subject, the registered user's id
/// - `iat`: Issued at (Unix timestamp)
/// - `exp`: Expiration time (Unix timestamp)
/// - `jti`: JWT ID, unique per issued token
///
/// Unknown payload fields are ignored on decode.
///
/// # Example
///
/// ```rust
/// use passgate_auth::TokenClaims;
/// use passgate_core::UserId;
///
/// let user = UserId::new();
/// let claims = TokenClaims::builder().subject(user).build().unwrap();
///
/// assert_eq!(claims.subject(), user);
/// assert_eq!(claims.exp - claims.iat, 3600);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject - the user id the token was issued to.
    pub sub: UserId,

    /// Issued at as Unix timestamp.
    pub iat: i64,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// JWT ID - unique identifier for this token.
    pub jti: TokenId,
}

impl TokenClaims {
    /// Create a new claims builder.
    #[must_use]
    pub fn builder() -> TokenClaimsBuilder {
        TokenClaimsBuilder::default()
    }

    /// The user this token speaks for.
    #[must_use]
    pub fn subject(&self) -> UserId {
        self.sub
    }

    /// Expiry as a timestamp. Values beyond chrono's range saturate to its
    /// bounds rather than wrapping.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(if self.exp < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    /// The token id (`jti`).
    #[must_use]
    pub fn token_id(&self) -> TokenId {
        self.jti
    }

    /// True iff `now` is at or past the expiry instant.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Check if the token has expired as of the current time.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Builder for `TokenClaims`.
#[derive(Debug, Default, Clone)]
pub struct TokenClaimsBuilder {
    sub: Option<UserId>,
    iat: Option<i64>,
    exp: Option<i64>,
    lifetime: Option<Duration>,
    jti: Option<TokenId>,
}

impl TokenClaimsBuilder {
    /// Set the subject.
    #[must_use]
    pub fn subject(mut self, sub: UserId) -> Self {
        self.sub = Some(sub);
        self
    }

    /// Set the issued-at time as Unix timestamp.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set expiration time as Unix timestamp. Takes precedence over `expires_in`.
    #[must_use]
    pub fn expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set the lifetime, counted from the issued-at time.
    #[must_use]
    pub fn expires_in(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Set the JWT ID.
    #[must_use]
    pub fn jwt_id(mut self, jti: TokenId) -> Self {
        self.jti = Some(jti);
        self
    }

    /// Build the claims.
    ///
    /// Defaults:
    /// - `iat`: current time
    /// - `exp`: `iat` + lifetime, or `iat` + 1 hour
    /// - `jti`: new UUID v4
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingClaim("sub")` if no subject was set.
    pub fn build(self) -> Result<TokenClaims, AuthError> {
        let sub = self
            .sub
            .ok_or_else(|| AuthError::MissingClaim("sub".to_string()))?;
        let iat = self.iat.unwrap_or_else(|| Utc::now().timestamp());
        let exp = self.exp.unwrap_or_else(|| {
            let secs = self
                .lifetime
                .map_or(DEFAULT_TOKEN_TTL_SECS, |d| d.num_seconds());
            iat.saturating_add(secs)
        });

        Ok(TokenClaims {
            sub,
            iat,
            exp,
            jti: self.jti.unwrap_or_default(),
        })
    }
}
