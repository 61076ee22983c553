//! Process Configuration
//!
//! Reads environment variables (after loading `.env`) into the injected
//! `AuthConfig` / `AdsConfig` plus server settings.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use ads::AdsConfig;
use anyhow::{Context, bail};
use auth::AuthConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub ads: AdsConfig,
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let token_secret = lookup("TOKEN_SECRET").context("TOKEN_SECRET must be set")?;
        if token_secret.is_empty() {
            bail!("TOKEN_SECRET must not be empty");
        }

        let bind_addr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse()?)?;
        let token_ttl_secs: u64 = parse_or(&lookup, "TOKEN_TTL_SECS", 900)?;
        let min_entropy_bits: f64 = parse_or(&lookup, "MIN_ENTROPY_BITS", 60.0)?;
        let probe_timeout_secs: u64 = parse_or(&lookup, "IMAGE_PROBE_TIMEOUT_SECS", 10)?;
        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let auth = AuthConfig {
            token_secret: token_secret.into_bytes(),
            token_ttl: Duration::from_secs(token_ttl_secs),
            min_entropy_bits,
            ..AuthConfig::default()
        };

        let ads = AdsConfig {
            image_probe_timeout: Duration::from_secs(probe_timeout_secs),
            ..AdsConfig::default()
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth,
            ads,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://localhost/marketplace"),
        ("TOKEN_SECRET", "s3cr3t"),
    ];

    #[test]
    fn test_defaults() {
        let config = load(&REQUIRED).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(900));
        assert_eq!(config.auth.min_entropy_bits, 60.0);
        assert_eq!(config.auth.token_secret, b"s3cr3t".to_vec());
        assert_eq!(config.ads.image_probe_timeout, Duration::from_secs(10));
        assert_eq!(config.frontend_origins.len(), 2);
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("TOKEN_TTL_SECS", "60"),
            ("MIN_ENTROPY_BITS", "70.5"),
            ("FRONTEND_ORIGINS", "https://shop.example, ,https://admin.example"),
        ]);
        let config = load(&vars).unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(60));
        assert_eq!(config.auth.min_entropy_bits, 70.5);
        assert_eq!(
            config.frontend_origins,
            ["https://shop.example", "https://admin.example"]
        );
    }

    #[test]
    fn test_missing_or_empty_secret() {
        assert!(load(&[("DATABASE_URL", "postgres://localhost/db")]).is_err());
        assert!(
            load(&[
                ("DATABASE_URL", "postgres://localhost/db"),
                ("TOKEN_SECRET", ""),
            ])
            .is_err()
        );
    }

    #[test]
    fn test_invalid_number() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("TOKEN_TTL_SECS", "fifteen minutes"));
        let err = load(&vars).unwrap_err();
        assert!(err.to_string().contains("TOKEN_TTL_SECS"));
    }
}
