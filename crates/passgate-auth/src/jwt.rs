//! JWT encoding and decoding with the HS256 algorithm.
//!
//! Provides free functions to sign and verify tokens with a shared secret,
//! and [`TokenAuthority`], the process-wide issuer/verifier built on them.

use crate::claims::{TokenClaims, MAX_TOKEN_TTL_SECS};
use crate::error::AuthError;
use crate::secret::SigningSecret;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, TokenData, Validation};
use passgate_core::UserId;
use std::fmt;

/// Configuration for JWT validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Seconds a token stays acceptable past its `exp` (clock skew tolerance).
    ///
    /// Zero by default: a token is accepted strictly before `exp`.
    pub leeway_secs: u64,
}

impl ValidationConfig {
    /// Create a new validation config with custom leeway.
    #[must_use]
    pub fn with_leeway(leeway_secs: u64) -> Self {
        Self { leeway_secs }
    }
}

/// A freshly signed token together with the claims it carries.
#[derive(Clone)]
pub struct IssuedToken {
    /// Compact JWS string handed to the client.
    pub token: String,
    /// Claims encoded in `token`.
    pub claims: TokenClaims,
}

impl fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedToken")
            .field("token", &"[redacted]")
            .field("claims", &self.claims)
            .finish()
    }
}

/// Encode claims into a signed HS256 token string.
///
/// # Errors
///
/// Returns `AuthError::SigningFailed` if the signing primitive fails.
///
/// # Example
///
/// ```rust
/// use passgate_auth::{encode_token, SigningSecret, TokenClaims};
/// use passgate_core::UserId;
///
/// let secret = SigningSecret::from("a-development-secret-of-32-bytes!");
/// let claims = TokenClaims::builder().subject(UserId::new()).build().unwrap();
///
/// let token = encode_token(&claims, &secret).unwrap();
/// assert_eq!(token.split('.').count(), 3);
/// ```
pub fn encode_token(claims: &TokenClaims, secret: &SigningSecret) -> Result<String, AuthError> {
    let header = Header::new(Algorithm::HS256);

    encode(&header, claims, &secret.encoding_key())
        .map_err(|e| AuthError::SigningFailed(e.to_string()))
}

/// Issue a token for `subject` valid for `ttl` from now.
///
/// # Errors
///
/// - `AuthError::InvalidTtl` if `ttl` is not positive or exceeds `MAX_TOKEN_TTL_SECS`
/// - `AuthError::SigningFailed` if signing fails
pub fn issue_token(
    subject: UserId,
    secret: &SigningSecret,
    ttl: Duration,
) -> Result<IssuedToken, AuthError> {
    check_ttl(ttl)?;

    let claims = TokenClaims::builder()
        .subject(subject)
        .issued_at(Utc::now().timestamp())
        .expires_in(ttl)
        .build()?;
    let token = encode_token(&claims, secret)?;

    Ok(IssuedToken { token, claims })
}

fn check_ttl(ttl: Duration) -> Result<(), AuthError> {
    if ttl <= Duration::zero() || ttl.num_seconds() > MAX_TOKEN_TTL_SECS {
        return Err(AuthError::InvalidTtl);
    }
    Ok(())
}

/// Decode and validate a token with the default validation config.
///
/// # Errors
///
/// - `AuthError::InvalidSignature` - Signature verification failed
/// - `AuthError::InvalidAlgorithm` - Token is not HS256
/// - `AuthError::InvalidToken` - Token or payload is malformed
/// - `AuthError::InvalidToken` / `AuthError::MissingClaim` - a required claim is absent
/// - `AuthError::TokenExpired` - Token has expired
pub fn decode_token(token: &str, secret: &SigningSecret) -> Result<TokenClaims, AuthError> {
    decode_token_with_config(token, secret, &ValidationConfig::default())
}

/// Decode and validate a token with custom validation config.
pub fn decode_token_with_config(
    token: &str,
    secret: &SigningSecret,
    config: &ValidationConfig,
) -> Result<TokenClaims, AuthError> {
    decode_token_at(token, secret, config, Utc::now())
}

/// Validation order: signature, claim shape, then expiry against `now`.
fn decode_token_at(
    token: &str,
    secret: &SigningSecret,
    config: &ValidationConfig,
    now: DateTime<Utc>,
) -> Result<TokenClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256];
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation.validate_aud = false;
    // Expiry is checked below so that a token is rejected at exactly `exp`.
    validation.validate_exp = false;
    validation.leeway = 0;

    let token_data: TokenData<TokenClaims> =
        decode(token, &secret.decoding_key(), &validation).map_err(map_jwt_error)?;
    let claims = token_data.claims;

    let leeway = i64::try_from(config.leeway_secs).unwrap_or(i64::MAX);
    if now.timestamp() >= claims.exp.saturating_add(leeway) {
        tracing::debug!(jti = %claims.jti, exp = claims.exp, "Token expired");
        return Err(AuthError::TokenExpired);
    }

    Ok(claims)
}

/// Map jsonwebtoken errors to AuthError.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            AuthError::InvalidAlgorithm
        }
        ErrorKind::InvalidToken => AuthError::InvalidToken("Malformed token".to_string()),
        ErrorKind::Base64(_) => AuthError::InvalidToken("Invalid base64 encoding".to_string()),
        ErrorKind::Json(_) => AuthError::InvalidToken("Invalid JSON in claims".to_string()),
        ErrorKind::Utf8(_) => AuthError::InvalidToken("Invalid UTF-8 in token".to_string()),
        ErrorKind::MissingRequiredClaim(claim) => AuthError::MissingClaim(claim.to_string()),
        _ => AuthError::InvalidToken(format!("Token validation failed: {err}")),
    }
}

/// Issues and verifies tokens with one secret and one lifetime.
///
/// Built once at startup from configuration and shared by reference
/// (typically in an `Arc`). Holds no mutable state.
///
/// # Example
///
/// ```rust
/// use chrono::Duration;
/// use passgate_auth::{SigningSecret, TokenAuthority};
/// use passgate_core::UserId;
///
/// let authority = TokenAuthority::new(
///     SigningSecret::from("a-development-secret-of-32-bytes!"),
///     Duration::hours(1),
/// )
/// .unwrap();
///
/// let user = UserId::new();
/// let issued = authority.issue(user).unwrap();
/// let claims = authority.verify(&issued.token).unwrap();
/// assert_eq!(claims.subject(), user);
/// ```
#[derive(Clone)]
pub struct TokenAuthority {
    secret: SigningSecret,
    ttl: Duration,
    validation: ValidationConfig,
}

impl TokenAuthority {
    /// Create an authority with the default validation config.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidTtl` if `ttl` is not positive or exceeds
    /// `MAX_TOKEN_TTL_SECS`.
    pub fn new(secret: SigningSecret, ttl: Duration) -> Result<Self, AuthError> {
        check_ttl(ttl)?;
        Ok(Self {
            secret,
            ttl,
            validation: ValidationConfig::default(),
        })
    }

    /// Replace the validation config.
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Lifetime given to every issued token.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject`.
    pub fn issue(&self, subject: UserId) -> Result<IssuedToken, AuthError> {
        issue_token(subject, &self.secret, self.ttl)
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode_token_with_config(token, &self.secret, &self.validation)
    }
}

impl fmt::Debug for TokenAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuthority")
            .field("secret", &self.secret)
            .field("ttl_secs", &self.ttl.num_seconds())
            .field("validation", &self.validation)
            .finish()
    }
}
