//! User Password Value Object
//!
//! Domain value objects for user passwords.
//! Delegates to `platform::password` for cryptographic operations and to a
//! `platform::entropy::EntropyEstimator` for the strength policy.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//! use platform::password::HashingCost;
//!
//! let cost = HashingCost { memory_kib: 4096, iterations: 1, parallelism: 1 };
//! let raw = RawPassword::new("correct horse battery staple".to_string());
//! let hashed = UserPassword::from_raw(&raw, &cost).unwrap();
//! assert!(hashed.verify(&raw).is_ok());
//! ```

use platform::entropy::EntropyEstimator;
use platform::password::{ClearTextPassword, HashedPassword, HashingCost, PasswordHashError};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    /// Reject passwords whose estimated entropy is below `min_bits`
    ///
    /// ## Errors
    /// `AuthError::WeakPassword` carrying the estimator's hint verbatim
    pub fn validate_strength(
        &self,
        estimator: &dyn EntropyEstimator,
        min_bits: f64,
    ) -> AuthResult<()> {
        let estimate = estimator.estimate(self.0.expose());
        if estimate.bits < min_bits {
            return Err(AuthError::WeakPassword(estimate.hint));
        }
        Ok(())
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
///
/// Stores password in Argon2id PHC string format.
/// A value loaded from the database is not re-validated until [`Self::verify`].
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(String);

impl UserPassword {
    /// Create from raw password by hashing
    ///
    /// CPU-bound; callers on the async runtime go through
    /// [`crate::application::credential_hasher::CredentialHasher`].
    pub fn from_raw(raw: &RawPassword, cost: &HashingCost) -> Result<Self, PasswordHashError> {
        let hashed = raw.0.hash(cost)?;
        Ok(Self(hashed.as_phc_string().to_owned()))
    }

    /// Restore from PHC string (from database)
    pub fn from_db(phc_string: String) -> Self {
        Self(phc_string)
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        &self.0
    }

    /// Verify a raw password against this hash
    ///
    /// ## Returns
    /// * `Err(PasswordHashError::Mismatch)` - wrong password
    /// * `Err(PasswordHashError::MalformedHash)` - stored value is not a PHC string
    pub fn verify(&self, raw: &RawPassword) -> Result<(), PasswordHashError> {
        HashedPassword::from_phc_string(self.0.as_str())?.verify(&raw.0)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
