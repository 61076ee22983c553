//! Sign In Use Case
//!
//! Verifies credentials and issues an access token.

use std::sync::Arc;

use crate::application::credential_hasher::CredentialHasher;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::RawPassword;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub login: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    hasher: CredentialHasher,
    tokens: Arc<TokenService>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, hasher: CredentialHasher, tokens: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Unknown login and wrong password are indistinguishable to the caller
        let user = self
            .user_repo
            .find_by_login(&input.login)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        self.hasher
            .verify(RawPassword::new(input.password), user.password_hash)
            .await?;

        let token = self
            .tokens
            .issue(user.user_id)
            .map_err(|e| AuthError::Internal(format!("Token encoding failed: {e}")))?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput { token })
    }
}
