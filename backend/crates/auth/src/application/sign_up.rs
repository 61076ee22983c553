//! Sign Up Use Case
//!
//! Registers a new user: login validation, password strength gate, hashing,
//! persistence.

use std::sync::Arc;

use platform::entropy::EntropyEstimator;

use crate::application::config::AuthConfig;
use crate::application::credential_hasher::CredentialHasher;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{login::Login, user_password::RawPassword};
use crate::error::AuthResult;

/// Sign up input
pub struct SignUpInput {
    pub login: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    hasher: CredentialHasher,
    estimator: Arc<dyn EntropyEstimator>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        hasher: CredentialHasher,
        estimator: Arc<dyn EntropyEstimator>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            estimator,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        let login = Login::new(
            input.login,
            self.config.login_min_length,
            self.config.login_max_length,
        )?;

        let raw_password = RawPassword::new(input.password);
        raw_password.validate_strength(self.estimator.as_ref(), self.config.min_entropy_bits)?;

        let password_hash = self.hasher.hash(raw_password).await?;

        // Uniqueness is enforced by the store (LoginTaken)
        let user = self.user_repo.create(&login, &password_hash).await?;

        tracing::info!(
            user_id = %user.user_id,
            login = %user.login,
            "User signed up"
        );

        Ok(user)
    }
}
