//! Access Token Service
//!
//! Issues and validates HMAC-SHA256 signed compact tokens of the form
//! `base64url(header).base64url(claims).base64url(signature)`.
//!
//! Tokens are stateless: they carry subject, issue time, expiry and issuer,
//! and become invalid only by expiring.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::application::config::AuthConfig;

const ALGORITHM: &str = "HS256";

/// Token validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,
    #[error("Token signature mismatch")]
    BadSignature,
    #[error("Token expired")]
    Expired,
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    iss: String,
    sub: Uuid,
    iat: i64,
    exp: i64,
}

/// トークンの発行と検証
///
/// 状態を持たないため `Arc` で auth / ads の両ルーターから共有されます。
///
/// ## Examples
/// ```rust
/// use std::time::Duration;
/// use auth::application::token::TokenService;
/// use kernel::id::UserId;
///
/// let tokens = TokenService::new(b"secret".to_vec(), Duration::from_secs(900), "marketplace");
/// let user_id = UserId::new();
/// let token = tokens.issue(user_id).unwrap();
/// assert_eq!(tokens.validate(&token), Ok(user_id));
/// ```
pub struct TokenService {
    secret: Vec<u8>,
    ttl: Duration,
    issuer: String,
}

impl TokenService {
    pub fn new(secret: Vec<u8>, ttl: Duration, issuer: impl Into<String>) -> Self {
        Self {
            secret,
            ttl,
            issuer: issuer.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.token_secret.clone(),
            config.token_ttl,
            config.token_issuer.clone(),
        )
    }

    /// Issue a token for `subject` valid from now
    pub fn issue(&self, subject: UserId) -> Result<String, serde_json::Error> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token for `subject` as of `now`
    ///
    /// Deterministic for a fixed `now`.
    pub fn issue_at(&self, subject: UserId, now: DateTime<Utc>) -> Result<String, serde_json::Error> {
        let header = Header {
            alg: ALGORITHM.to_string(),
            typ: "JWT".to_string(),
        };
        let iat = now.timestamp();
        let claims = Claims {
            iss: self.issuer.clone(),
            sub: subject.into_uuid(),
            iat,
            exp: iat.saturating_add(i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX)),
        };

        let signing_input = format!(
            "{}.{}",
            to_base64url(&serde_json::to_vec(&header)?),
            to_base64url(&serde_json::to_vec(&claims)?)
        );
        let signature = hmac_sha256(&self.secret, signing_input.as_bytes());

        Ok(format!("{}.{}", signing_input, to_base64url(&signature)))
    }

    /// Validate a token against the current time
    pub fn validate(&self, token: &str) -> Result<UserId, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token as of `now`
    ///
    /// The signature is checked before header or claims are decoded.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, TokenError> {
        let mut segments = token.split('.');
        let (Some(header_b64), Some(claims_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        let signature = from_base64url(signature_b64).map_err(|_| TokenError::Malformed)?;
        let signing_input = &token[..header_b64.len() + 1 + claims_b64.len()];
        if !verify_hmac_sha256(&self.secret, signing_input.as_bytes(), &signature) {
            return Err(TokenError::BadSignature);
        }

        let header: Header = decode_segment(header_b64)?;
        if header.alg != ALGORITHM {
            return Err(TokenError::Malformed);
        }

        let claims: Claims = decode_segment(claims_b64)?;
        if claims.iss != self.issuer {
            return Err(TokenError::Malformed);
        }
        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(UserId::from_uuid(claims.sub))
    }
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, TokenError> {
    let bytes = from_base64url(segment).map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)
}
