//! Request Authentication
//!
//! Resolves the caller of a request from its `Authorization` header.

use std::sync::Arc;

use axum::http::HeaderMap;
use kernel::id::UserId;
use platform::bearer;

use crate::application::token::TokenService;
use crate::domain::value_object::identity::Identity;
use crate::error::AuthResult;

/// Bearer-token authenticator shared by protected routes
#[derive(Clone)]
pub struct Authenticator {
    tokens: Arc<TokenService>,
}

impl Authenticator {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Mandatory authentication
    ///
    /// ## Errors
    /// * `AuthError::Bearer` - header missing or not `Bearer <token>`
    /// * `AuthError::Token` - token malformed, forged or expired
    pub fn require(&self, headers: &HeaderMap) -> AuthResult<UserId> {
        let token = bearer::extract_from_headers(headers)?;
        Ok(self.tokens.validate(token)?)
    }

    /// Optional authentication
    ///
    /// No header means [`Identity::Anonymous`]; a header that is present but
    /// invalid is still an error.
    pub fn identify(&self, headers: &HeaderMap) -> AuthResult<Identity> {
        if !bearer::has_authorization(headers) {
            return Ok(Identity::Anonymous);
        }
        self.require(headers).map(Identity::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::token::TokenError;
    use crate::error::AuthError;
    use axum::http::{HeaderValue, header};
    use platform::bearer::BearerError;
    use std::time::Duration;

    fn authenticator() -> (Authenticator, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new(
            b"secret".to_vec(),
            Duration::from_secs(900),
            "marketplace",
        ));
        (Authenticator::new(tokens.clone()), tokens)
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_require_valid_token() {
        let (auth, tokens) = authenticator();
        let user_id = UserId::new();
        let token = tokens.issue(user_id).unwrap();

        let resolved = auth.require(&headers_with(&format!("Bearer {token}"))).unwrap();
        assert_eq!(resolved, user_id);
    }

    #[test]
    fn test_require_missing_header() {
        let (auth, _) = authenticator();
        assert!(matches!(
            auth.require(&HeaderMap::new()),
            Err(AuthError::Bearer(BearerError::MissingHeader))
        ));
    }

    #[test]
    fn test_require_forged_token() {
        let (auth, _) = authenticator();
        let foreign = TokenService::new(b"other".to_vec(), Duration::from_secs(900), "marketplace");
        let token = foreign.issue(UserId::new()).unwrap();
        assert!(matches!(
            auth.require(&headers_with(&format!("Bearer {token}"))),
            Err(AuthError::Token(TokenError::BadSignature))
        ));
    }

    #[test]
    fn test_require_garbage_token() {
        let (auth, _) = authenticator();
        assert!(matches!(
            auth.require(&headers_with("Bearer a.b.c")),
            Err(AuthError::Token(TokenError::Malformed))
        ));
    }

    #[test]
    fn test_identify_without_header_is_anonymous() {
        let (auth, _) = authenticator();
        assert_eq!(auth.identify(&HeaderMap::new()).unwrap(), Identity::Anonymous);
    }

    #[test]
    fn test_identify_with_valid_token() {
        let (auth, tokens) = authenticator();
        let user_id = UserId::new();
        let token = tokens.issue(user_id).unwrap();
        assert_eq!(
            auth.identify(&headers_with(&format!("Bearer {token}"))).unwrap(),
            Identity::Authenticated(user_id)
        );
    }

    #[test]
    fn test_identify_with_invalid_header_is_error() {
        let (auth, _) = authenticator();
        assert!(matches!(
            auth.identify(&headers_with("Token abc")),
            Err(AuthError::Bearer(BearerError::MalformedScheme))
        ));
    }
}
