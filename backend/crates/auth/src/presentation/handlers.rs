//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use platform::entropy::EntropyEstimator;

use crate::application::{
    AuthConfig, CredentialHasher, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
    TokenService,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{CredentialsRequest, RegisterResponse, TokenResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
    pub estimator: Arc<dyn EntropyEstimator>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    fn hasher(&self) -> CredentialHasher {
        CredentialHasher::new(self.config.hashing_cost)
    }
}

// ============================================================================
// Registration
// ============================================================================

/// POST /api/reg
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|_| AuthError::InvalidRequestBody)?;

    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.hasher(),
        state.estimator.clone(),
        state.config.clone(),
    );

    let user = use_case
        .execute(SignUpInput {
            login: req.login,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

// ============================================================================
// Authentication
// ============================================================================

/// POST /api/auth
pub async fn authenticate<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|_| AuthError::InvalidRequestBody)?;

    let use_case = SignInUseCase::new(state.repo.clone(), state.hasher(), state.tokens.clone());

    let output = use_case
        .execute(SignInInput {
            login: req.login,
            password: req.password,
        })
        .await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}
