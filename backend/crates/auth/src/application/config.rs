//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

pub use platform::password::HashingCost;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC-SHA256 token signing (any length, non-empty)
    pub token_secret: Vec<u8>,
    /// Access token lifetime (15 minutes)
    pub token_ttl: Duration,
    /// Issuer tag embedded in and required of every token
    pub token_issuer: String,
    /// Minimum password entropy in bits
    pub min_entropy_bits: f64,
    /// Login length bounds (in characters, inclusive)
    pub login_min_length: usize,
    pub login_max_length: usize,
    /// Argon2id cost parameters
    pub hashing_cost: HashingCost,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(15 * 60),
            token_issuer: "marketplace".to_string(),
            min_entropy_bits: 60.0,
            login_min_length: 5,
            login_max_length: 32,
            hashing_cost: HashingCost::default(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development and tests (random secret, cheap hashing)
    pub fn development() -> Self {
        Self {
            hashing_cost: HashingCost {
                memory_kib: 4096,
                iterations: 1,
                parallelism: 1,
            },
            ..Self::with_random_secret()
        }
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("token_issuer", &self.token_issuer)
            .field("min_entropy_bits", &self.min_entropy_bits)
            .field("login_min_length", &self.login_min_length)
            .field("login_max_length", &self.login_max_length)
            .field("hashing_cost", &self.hashing_cost)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_secs(), 900);
        assert_eq!(config.min_entropy_bits, 60.0);
        assert_eq!((config.login_min_length, config.login_max_length), (5, 32));
    }

    #[test]
    fn test_ttl_secs_saturates() {
        let config = AuthConfig {
            token_ttl: Duration::from_secs(u64::MAX),
            ..Default::default()
        };
        assert_eq!(config.token_ttl_secs(), i64::MAX);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig {
            token_secret: b"super-secret-value".to_vec(),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super-secret-value"));
    }
}
