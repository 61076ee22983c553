//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>` header values.
//! The scheme is case-sensitive and followed by exactly one space; the token
//! must be non-empty and contain no whitespace.

use axum::http::{HeaderMap, header};

const BEARER_PREFIX: &str = "Bearer ";

/// Error when extracting a bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    MissingHeader,
    #[error("Authorization header is not of the form `Bearer <token>`")]
    MalformedScheme,
}

/// `Authorization` ヘッダー値からトークンを取り出す
///
/// ## Arguments
/// * `header` - ヘッダー値（存在しない場合は `None`）
///
/// ## Returns
/// * `Ok(&str)` - トークン部分
/// * `Err(BearerError::MissingHeader)` - ヘッダーなし
/// * `Err(BearerError::MalformedScheme)` - 形式不正
///
/// ## Examples
/// ```rust
/// use platform::bearer::{extract, BearerError};
///
/// assert_eq!(extract(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
/// assert_eq!(extract(Some("bearer abc")), Err(BearerError::MalformedScheme));
/// assert_eq!(extract(None), Err(BearerError::MissingHeader));
/// ```
pub fn extract(header: Option<&str>) -> Result<&str, BearerError> {
    let value = header.ok_or(BearerError::MissingHeader)?;
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::MalformedScheme)?;

    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(BearerError::MalformedScheme);
    }
    Ok(token)
}

/// `HeaderMap` から bearer トークンを取り出す
///
/// Header values that are not visible ASCII are reported as
/// [`BearerError::MalformedScheme`].
pub fn extract_from_headers(headers: &HeaderMap) -> Result<&str, BearerError> {
    match headers.get(header::AUTHORIZATION) {
        None => Err(BearerError::MissingHeader),
        Some(value) => {
            let value = value.to_str().map_err(|_| BearerError::MalformedScheme)?;
            extract(Some(value))
        }
    }
}

/// `Authorization` ヘッダーが存在するか
pub fn has_authorization(headers: &HeaderMap) -> bool {
    headers.contains_key(header::AUTHORIZATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_valid() {
        assert_eq!(extract(Some("Bearer token123")), Ok("token123"));
    }

    #[test]
    fn test_extract_missing() {
        assert_eq!(extract(None), Err(BearerError::MissingHeader));
    }

    #[test]
    fn test_extract_wrong_scheme() {
        assert_eq!(extract(Some("Basic dXNlcjpwYXNz")), Err(BearerError::MalformedScheme));
        assert_eq!(extract(Some("bearer token123")), Err(BearerError::MalformedScheme));
        assert_eq!(extract(Some("Bearertoken123")), Err(BearerError::MalformedScheme));
    }

    #[test]
    fn test_extract_empty_or_spaced_token() {
        assert_eq!(extract(Some("Bearer ")), Err(BearerError::MalformedScheme));
        assert_eq!(extract(Some("Bearer  token")), Err(BearerError::MalformedScheme));
        assert_eq!(extract(Some("Bearer a b")), Err(BearerError::MalformedScheme));
        assert_eq!(extract(Some("")), Err(BearerError::MalformedScheme));
    }

    #[test]
    fn test_extract_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_from_headers(&headers), Err(BearerError::MissingHeader));
        assert!(!has_authorization(&headers));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(extract_from_headers(&headers), Ok("abc"));
        assert!(has_authorization(&headers));
    }

    #[test]
    fn test_extract_from_headers_non_ascii() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert_eq!(extract_from_headers(&headers), Err(BearerError::MalformedScheme));
    }
}
