//! Credential Hasher
//!
//! Runs Argon2id hashing and verification on the tokio blocking pool so that
//! CPU-bound work never stalls other requests.

use platform::password::{HashingCost, PasswordHashError};
use tokio::task;

use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Argon2id hashing service
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: HashingCost,
}

impl CredentialHasher {
    pub fn new(cost: HashingCost) -> Self {
        Self { cost }
    }

    /// Hash a password with a fresh random salt
    pub async fn hash(&self, password: RawPassword) -> AuthResult<UserPassword> {
        let cost = self.cost;
        task::spawn_blocking(move || UserPassword::from_raw(&password, &cost))
            .await
            .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))?
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Verify a password against a stored hash
    ///
    /// Mismatch and a malformed stored hash both surface as
    /// [`AuthError::InvalidCredentials`]; the latter is logged at `error`.
    pub async fn verify(&self, password: RawPassword, stored: UserPassword) -> AuthResult<()> {
        let outcome = task::spawn_blocking(move || stored.verify(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("Verification task failed: {e}")))?;

        match outcome {
            Ok(()) => Ok(()),
            Err(PasswordHashError::MalformedHash) => {
                tracing::error!("Stored password hash is not a valid PHC string");
                Err(AuthError::InvalidCredentials)
            }
            Err(PasswordHashError::Mismatch) => Err(AuthError::InvalidCredentials),
            Err(e @ PasswordHashError::HashingFailed(_)) => Err(AuthError::Internal(e.to_string())),
        }
    }
}
