//! Ads Error Types
//!
//! This module provides ads-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Ads-specific result type alias
pub type AdsResult<T> = Result<T, AdsError>;

/// Why an image address was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImageRejection {
    #[error("invalid image address")]
    InvalidAddress,
    #[error("invalid image format")]
    InvalidFormat,
    #[error("image size is too big")]
    TooLarge,
}

/// Ads-specific error variants
///
/// `Display` is the client-facing message for 4xx variants.
#[derive(Debug, Error)]
pub enum AdsError {
    #[error("invalid length of title")]
    InvalidTitleLength,

    #[error("invalid length of description")]
    InvalidDescriptionLength,

    #[error("incorrect price")]
    InvalidPrice,

    #[error("{0}")]
    ImageRejected(#[from] ImageRejection),

    #[error("min_price cannot be greater than max_price")]
    InconsistentPriceBounds,

    #[error("invalid query parameters")]
    InvalidQuery,

    #[error("invalid request body format")]
    InvalidRequestBody,

    /// Authentication failure; rendered by `AuthError`
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Image host could not be reached
    #[error("Image probe failed: {0}")]
    ImageProbe(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AdsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdsError::InvalidTitleLength
            | AdsError::InvalidDescriptionLength
            | AdsError::InvalidPrice
            | AdsError::ImageRejected(_)
            | AdsError::InconsistentPriceBounds
            | AdsError::InvalidQuery
            | AdsError::InvalidRequestBody => ErrorKind::Validation,
            AdsError::Auth(e) => e.kind(),
            AdsError::ImageProbe(_) | AdsError::Database(_) => ErrorKind::Dependency,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AdsError::Auth(e) => e.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AdsError::Database(e) => {
                tracing::error!(error = %e, "Ads database error");
            }
            AdsError::ImageProbe(reason) => {
                tracing::error!(reason = %reason, "Image probe failed");
            }
            _ => {
                tracing::debug!(error = %self, "Ads error");
            }
        }
    }
}

impl IntoResponse for AdsError {
    fn into_response(self) -> Response {
        match self {
            AdsError::Auth(e) => e.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}
