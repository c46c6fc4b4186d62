//! HTTP error mapping for the auth API.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use passgate_auth::AccessDenied;
use passgate_core::PassgateError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-facing message for every `Internal` failure.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Auth API error: a [`PassgateError`] that knows its HTTP shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct ApiAuthError(pub PassgateError);

/// Structured error response returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiAuthError {
    /// The wrapped caller-facing error.
    #[must_use]
    pub fn kind(&self) -> &PassgateError {
        &self.0
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            PassgateError::Validation { .. } => StatusCode::BAD_REQUEST,
            PassgateError::InvalidCredentials => StatusCode::BAD_REQUEST,
            PassgateError::DuplicateIdentity => StatusCode::CONFLICT,
            PassgateError::Unauthenticated => StatusCode::UNAUTHORIZED,
            PassgateError::Forbidden => StatusCode::FORBIDDEN,
            PassgateError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the client. Internal details are replaced.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        let message = match &self.0 {
            PassgateError::Internal { .. } => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        };
        ErrorResponse {
            error: self.0.error_code().to_string(),
            message,
        }
    }
}

impl From<PassgateError> for ApiAuthError {
    fn from(err: PassgateError) -> Self {
        Self(err)
    }
}

impl From<AccessDenied> for ApiAuthError {
    fn from(denied: AccessDenied) -> Self {
        Self(denied.into())
    }
}

impl From<JsonRejection> for ApiAuthError {
    fn from(rejection: JsonRejection) -> Self {
        Self(PassgateError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        if let PassgateError::Internal { message } = &self.0 {
            tracing::error!(error = %message, "Request failed with internal error");
        }

        let status = self.status_code();
        let mut response = (status, Json(self.to_response())).into_response();

        if matches!(self.0, PassgateError::Unauthenticated) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}

/// Result type alias for auth API handlers.
pub type ApiResult<T> = Result<T, ApiAuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: PassgateError) -> StatusCode {
        ApiAuthError(err).into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(PassgateError::validation("email", "bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(PassgateError::InvalidCredentials),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(PassgateError::DuplicateIdentity),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(PassgateError::Unauthenticated),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(PassgateError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(PassgateError::internal("db down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthenticated_sets_challenge_header() {
        let response = ApiAuthError(PassgateError::Unauthenticated).into_response();

        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_forbidden_has_no_challenge_header() {
        let response = ApiAuthError(PassgateError::Forbidden).into_response();

        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_internal_details_hidden() {
        let body = ApiAuthError(PassgateError::internal("argon2 exploded")).to_response();

        assert_eq!(body.error, "internal_error");
        assert_eq!(body.message, INTERNAL_MESSAGE);
    }

    #[test]
    fn test_access_denied_conversion() {
        assert_eq!(
            ApiAuthError::from(AccessDenied::Forbidden).kind(),
            &PassgateError::Forbidden
        );
    }
}
