//! Auth Middleware
//!
//! Resolves the caller's [`Identity`] from the bearer token and stores it in
//! request extensions for downstream handlers.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use platform::bearer::BearerError;

use crate::application::Authenticator;
use crate::domain::value_object::identity::Identity;
use crate::error::{AuthError, AuthResult};

/// Middleware that resolves the caller but doesn't require authentication
///
/// A missing `Authorization` header yields [`Identity::Anonymous`]; a present
/// but invalid one is rejected with 401.
///
/// ## Examples
/// ```rust,ignore
/// Router::new()
///     .route("/ads", get(list).post(create))
///     .layer(axum::middleware::from_fn_with_state(authenticator, resolve_identity))
/// ```
pub async fn resolve_identity(
    State(authenticator): State<Authenticator>,
    mut req: Request,
    next: Next,
) -> Response {
    match authenticator.identify(req.headers()) {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

/// Demand an authenticated caller
pub fn require_user(identity: Identity) -> AuthResult<UserId> {
    identity
        .user_id()
        .ok_or(AuthError::Bearer(BearerError::MissingHeader))
}
