//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use thiserror::Error;

use crate::application::token::TokenError;
use crate::domain::value_object::login::LoginError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// `Display` is the client-facing message for 4xx variants.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login failed length/format validation
    #[error("{0}")]
    InvalidLogin(#[from] LoginError),

    /// Password entropy below threshold; carries the estimator hint
    #[error("{0}")]
    WeakPassword(String),

    /// Body could not be parsed as the expected JSON
    #[error("invalid request body format")]
    InvalidRequestBody,

    /// Login already registered
    #[error("this login's already in use")]
    LoginTaken,

    /// Unknown login or wrong password (indistinguishable to the client)
    #[error("invalid login or password")]
    InvalidCredentials,

    /// Missing or malformed `Authorization` header
    #[error("invalid or expired access token")]
    Bearer(#[from] BearerError),

    /// Token failed validation
    #[error("invalid or expired access token")]
    Token(#[from] TokenError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidLogin(_)
            | AuthError::WeakPassword(_)
            | AuthError::InvalidRequestBody => ErrorKind::Validation,
            AuthError::LoginTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::Bearer(_) | AuthError::Token(_) => {
                ErrorKind::Unauthorized
            }
            AuthError::Database(_) => ErrorKind::Dependency,
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Token(e) => {
                tracing::warn!(reason = %e, "Rejected access token");
            }
            AuthError::Bearer(e) => {
                tracing::debug!(reason = %e, "Rejected Authorization header");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(AuthError::LoginTaken.kind(), ErrorKind::Conflict);
        assert_eq!(AuthError::InvalidCredentials.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            AuthError::Token(TokenError::Expired).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            AuthError::InvalidLogin(LoginError::InvalidFormat).kind(),
            ErrorKind::Validation
        );
        assert_eq!(AuthError::Internal("x".into()).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_client_messages() {
        assert_eq!(
            AuthError::InvalidLogin(LoginError::InvalidLength).to_app_error().client_message(),
            "invalid length of login"
        );
        assert_eq!(
            AuthError::Bearer(BearerError::MissingHeader)
                .to_app_error()
                .client_message(),
            "invalid or expired access token"
        );
        assert_eq!(
            AuthError::Internal("join error".into())
                .to_app_error()
                .client_message(),
            "internal server error"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::LoginTaken.into_response().status().as_u16(), 400);
        assert_eq!(
            AuthError::InvalidCredentials.into_response().status().as_u16(),
            401
        );
        assert_eq!(
            AuthError::Internal("boom".into()).into_response().status().as_u16(),
            500
        );
    }
}
