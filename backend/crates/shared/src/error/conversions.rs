//! Error conversions - integration of [`AppError`] with infrastructure crates
//!
//! - SQLx: constraint classification helpers (feature `sqlx`)
//! - Axum: JSON error response rendering (feature `axum`)

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;

// ============================================================================
// SQLx helpers (feature-gated)
// ============================================================================

/// PostgreSQL unique_violation
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
#[cfg(feature = "sqlx")]
const PG_UNIQUE_VIOLATION: &str = "23505";

/// 一意制約違反かどうかを判定
///
/// `constraint` を指定した場合は制約名も一致する必要があります。
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error, constraint: Option<&str>) -> bool {
    let sqlx::Error::Database(db_err) = err else {
        return false;
    };
    if db_err.code().as_deref() != Some(PG_UNIQUE_VIOLATION) {
        return false;
    }
    match constraint {
        Some(name) => db_err.constraint() == Some(name),
        None => true,
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut => {
                AppError::dependency("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Io(_) => AppError::dependency("Database connection error").with_source(err),
            _ => AppError::dependency("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "error": self.client_message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_server_error_response_status() {
        let response = AppError::dependency("db down").into_response();
        assert_eq!(response.status().as_u16(), 500);
    }

    #[test]
    fn test_conflict_response_status() {
        let response = AppError::conflict("this login's already in use").into_response();
        assert_eq!(response.status().as_u16(), 400);
    }
}
