//! Bearer credential handling for protected operations.
//!
//! Turns the raw `Authorization` header into claims or a client-facing
//! denial. Rejection reasons are logged here and never leave this module.

use crate::claims::TokenClaims;
use crate::jwt::TokenAuthority;
use passgate_core::PassgateError;
use thiserror::Error;

const BEARER_SCHEME: &str = "bearer";

/// What the caller put in the `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerCredential<'a> {
    /// No header, or only whitespace.
    Absent,
    /// `Bearer <token>`.
    Presented(&'a str),
    /// Some other non-blank value.
    Malformed,
}

/// Why a protected operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// No credential was presented.
    #[error("Authentication required")]
    Unauthenticated,
    /// A credential was presented but rejected.
    #[error("Access denied")]
    Forbidden,
}

impl From<AccessDenied> for PassgateError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::Unauthenticated => PassgateError::Unauthenticated,
            AccessDenied::Forbidden => PassgateError::Forbidden,
        }
    }
}

/// Classify an `Authorization` header value.
///
/// The scheme is matched case-insensitively and surrounding whitespace is
/// ignored.
///
/// ```rust
/// use passgate_auth::{extract_bearer, BearerCredential};
///
/// assert_eq!(extract_bearer(None), BearerCredential::Absent);
/// assert_eq!(extract_bearer(Some("Bearer abc")), BearerCredential::Presented("abc"));
/// assert_eq!(extract_bearer(Some("Basic abc")), BearerCredential::Malformed);
/// ```
#[must_use]
pub fn extract_bearer(header: Option<&str>) -> BearerCredential<'_> {
    let Some(value) = header.map(str::trim).filter(|v| !v.is_empty()) else {
        return BearerCredential::Absent;
    };

    let Some((scheme, token)) = value.split_once(char::is_whitespace) else {
        return BearerCredential::Malformed;
    };
    let token = token.trim();

    if scheme.eq_ignore_ascii_case(BEARER_SCHEME)
        && !token.is_empty()
        && !token.contains(char::is_whitespace)
    {
        BearerCredential::Presented(token)
    } else {
        BearerCredential::Malformed
    }
}

/// Gate a protected operation on the caller's `Authorization` header.
///
/// # Errors
///
/// - `AccessDenied::Unauthenticated` when no credential is presented
/// - `AccessDenied::Forbidden` when the credential is malformed, expired,
///   or fails signature verification
pub fn authorize(
    header: Option<&str>,
    authority: &TokenAuthority,
) -> Result<TokenClaims, AccessDenied> {
    let token = match extract_bearer(header) {
        BearerCredential::Presented(token) => token,
        BearerCredential::Absent => {
            tracing::debug!("No bearer credential presented");
            return Err(AccessDenied::Unauthenticated);
        }
        BearerCredential::Malformed => {
            tracing::debug!("Authorization header is not a bearer credential");
            return Err(AccessDenied::Forbidden);
        }
    };

    authority.verify(token).map_err(|e| {
        tracing::warn!(reason = %e, expired = e.is_expired(), "Bearer token rejected");
        AccessDenied::Forbidden
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encode_token;
    use crate::secret::SigningSecret;
    use chrono::{Duration, Utc};
    use passgate_core::UserId;

    fn authority() -> TokenAuthority {
        TokenAuthority::new(
            SigningSecret::from("gate-test-secret-of-at-least-32b"),
            Duration::hours(1),
        )
        .unwrap()
    }

    mod extract_tests {
        use super::*;

        #[test]
        fn test_absent_header() {
            assert_eq!(extract_bearer(None), BearerCredential::Absent);
            assert_eq!(extract_bearer(Some("")), BearerCredential::Absent);
            assert_eq!(extract_bearer(Some("   ")), BearerCredential::Absent);
        }

        #[test]
        fn test_bearer_scheme_case_insensitive() {
            assert_eq!(
                extract_bearer(Some("bearer abc.def.ghi")),
                BearerCredential::Presented("abc.def.ghi")
            );
            assert_eq!(
                extract_bearer(Some("BEARER abc.def.ghi")),
                BearerCredential::Presented("abc.def.ghi")
            );
        }

        #[test]
        fn test_surrounding_whitespace_trimmed() {
            assert_eq!(
                extract_bearer(Some("  Bearer   abc.def.ghi  ")),
                BearerCredential::Presented("abc.def.ghi")
            );
        }

        #[test]
        fn test_malformed_values() {
            assert_eq!(extract_bearer(Some("Bearer")), BearerCredential::Malformed);
            assert_eq!(extract_bearer(Some("Bearer  ")), BearerCredential::Malformed);
            assert_eq!(extract_bearer(Some("abc.def.ghi")), BearerCredential::Malformed);
            assert_eq!(extract_bearer(Some("Basic dXNlcjpwYXNz")), BearerCredential::Malformed);
            assert_eq!(extract_bearer(Some("Bearer a b")), BearerCredential::Malformed);
        }
    }

    mod authorize_tests {
        use super::*;

        #[test]
        fn test_valid_token_yields_claims() {
            let user = UserId::new();
            let authority = authority();
            let issued = authority.issue(user).unwrap();
            let header = format!("Bearer {}", issued.token);

            let claims = authorize(Some(&header), &authority).unwrap();
            assert_eq!(claims.subject(), user);
        }

        #[test]
        fn test_missing_header_is_unauthenticated() {
            let result = authorize(None, &authority());

            assert_eq!(result.unwrap_err(), AccessDenied::Unauthenticated);
        }

        #[test]
        fn test_malformed_header_is_forbidden() {
            let result = authorize(Some("Token abc"), &authority());

            assert_eq!(result.unwrap_err(), AccessDenied::Forbidden);
        }

        #[test]
        fn test_garbage_token_is_forbidden() {
            let result = authorize(Some("Bearer not-a-jwt"), &authority());

            assert_eq!(result.unwrap_err(), AccessDenied::Forbidden);
        }

        #[test]
        fn test_expired_token_is_forbidden() {
            let claims = TokenClaims::builder()
                .subject(UserId::new())
                .expiration(Utc::now().timestamp() - 10)
                .build()
                .unwrap();
            let token = encode_token(
                &claims,
                &SigningSecret::from("gate-test-secret-of-at-least-32b"),
            )
            .unwrap();
            let header = format!("Bearer {token}");

            let result = authorize(Some(&header), &authority());
            assert_eq!(result.unwrap_err(), AccessDenied::Forbidden);
        }

        #[test]
        fn test_foreign_signature_is_forbidden() {
            let foreign = TokenAuthority::new(
                SigningSecret::from("some-other-secret-of-32-bytes!!!"),
                Duration::hours(1),
            )
            .unwrap();
            let issued = foreign.issue(UserId::new()).unwrap();
            let header = format!("Bearer {}", issued.token);

            let result = authorize(Some(&header), &authority());
            assert_eq!(result.unwrap_err(), AccessDenied::Forbidden);
        }

        #[test]
        fn test_denial_maps_to_caller_taxonomy() {
            assert_eq!(
                PassgateError::from(AccessDenied::Unauthenticated),
                PassgateError::Unauthenticated
            );
            assert_eq!(
                PassgateError::from(AccessDenied::Forbidden),
                PassgateError::Forbidden
            );
        }
    }
}
