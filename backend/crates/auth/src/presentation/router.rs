//! Auth Router

use axum::{Router, routing::post};
use platform::entropy::{CharsetEntropyEstimator, EntropyEstimator};
use std::sync::Arc;

use crate::application::{AuthConfig, TokenService};
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig, tokens: Arc<TokenService>) -> Router {
    auth_router_generic(repo, config, tokens, Arc::new(CharsetEntropyEstimator))
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(
    repo: R,
    config: AuthConfig,
    tokens: Arc<TokenService>,
    estimator: Arc<dyn EntropyEstimator>,
) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens,
        estimator,
    };

    Router::new()
        .route("/reg", post(handlers::register::<R>))
        .route("/auth", post(handlers::authenticate::<R>))
        .with_state(state)
}
