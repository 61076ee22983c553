//! Password Hashing and Verification
//!
//! Argon2id password handling with:
//! - Tunable cost (memory, iterations, parallelism)
//! - Fresh random salt per hash, PHC string output
//! - Zeroization of sensitive data
//! - Constant-time verification (performed inside `argon2`)
//!
//! Strength policy is not enforced here; see [`crate::entropy`].

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString},
};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed (invalid cost parameters, RNG failure)
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a parseable PHC string
    #[error("Malformed password hash")]
    MalformedHash,

    /// Password does not match the stored hash
    #[error("Password mismatch")]
    Mismatch,
}

// ============================================================================
// Hashing Cost
// ============================================================================

/// Argon2id cost parameters
///
/// Defaults follow the OWASP recommendation: m=19456 KiB (19 MiB), t=2, p=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingCost {
    /// Memory size in KiB
    pub memory_kib: u32,
    /// Number of iterations
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashingCost {
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl HashingCost {
    fn hasher(&self) -> Result<Argon2<'static>, PasswordHashError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::{ClearTextPassword, HashingCost};
///
/// let cost = HashingCost { memory_kib: 4096, iterations: 1, parallelism: 1 };
/// let password = ClearTextPassword::new("Tr0ub4dor&3-horse".to_string());
/// let hashed = password.hash(&cost).unwrap();
/// assert!(hashed.verify(&password).is_ok());
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// 平文パスワードを包む（検証は行わない）
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Borrow the password as `&str` (for entropy estimation)
    pub fn expose(&self) -> &str {
        &self.0
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `cost` - Argon2id のコストパラメータ
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, cost: &HashingCost) -> Result<HashedPassword, PasswordHashError> {
        // 128-bit random salt
        let salt = SaltString::generate(&mut OsRng);

        let hash = cost
            .hasher()?
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The string embeds algorithm, version, cost parameters, salt and digest,
/// so verification needs nothing but the string itself.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::MalformedHash)?;
        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Cost parameters are taken from the hash itself.
    ///
    /// ## Returns
    /// * `Ok(())` - 一致
    /// * `Err(PasswordHashError::Mismatch)` - 不一致
    /// * `Err(PasswordHashError::MalformedHash)` - ハッシュが解釈できない
    pub fn verify(&self, password: &ClearTextPassword) -> Result<(), PasswordHashError> {
        let parsed = PasswordHash::new(&self.hash).map_err(|_| PasswordHashError::MalformedHash)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(()),
            Err(password_hash::Error::Password) => Err(PasswordHashError::Mismatch),
            Err(_) => Err(PasswordHashError::MalformedHash),
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CHEAP: HashingCost = HashingCost {
        memory_kib: 4096,
        iterations: 1,
        parallelism: 1,
    };

    fn pw(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string())
    }

    #[test]
    fn test_hash_and_verify() {
        let hashed = pw("secret123").hash(&CHEAP).unwrap();
        assert!(hashed.verify(&pw("secret123")).is_ok());
        assert!(matches!(
            hashed.verify(&pw("secret124")),
            Err(PasswordHashError::Mismatch)
        ));
    }

    #[test]
    fn test_salt_is_random() {
        let password = pw("same password");
        let a = password.hash(&CHEAP).unwrap();
        let b = password.hash(&CHEAP).unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
        assert!(a.verify(&password).is_ok());
        assert!(b.verify(&password).is_ok());
    }

    #[test]
    fn test_phc_string_embeds_cost() {
        let hashed = pw("secret123").hash(&CHEAP).unwrap();
        let phc = hashed.as_phc_string();
        assert!(phc.starts_with("$argon2id$v=19$"));
        assert!(phc.contains("m=4096,t=1,p=1"));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = pw("TestPassword123!");
        let hashed = password.hash(&CHEAP).unwrap();
        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password).is_ok());
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(matches!(
            HashedPassword::from_phc_string("not_a_valid_hash"),
            Err(PasswordHashError::MalformedHash)
        ));
    }

    #[test]
    fn test_invalid_cost_is_hashing_failure() {
        let cost = HashingCost {
            memory_kib: 1,
            iterations: 1,
            parallelism: 1,
        };
        assert!(matches!(
            pw("secret123").hash(&cost),
            Err(PasswordHashError::HashingFailed(_))
        ));
    }

    #[test]
    fn test_default_cost() {
        let cost = HashingCost::default();
        assert_eq!(cost.memory_kib, 19_456);
        assert_eq!(cost.iterations, 2);
        assert_eq!(cost.parallelism, 1);
    }

    #[test]
    fn test_debug_redaction() {
        let password = pw("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
