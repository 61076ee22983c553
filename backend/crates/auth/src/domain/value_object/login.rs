//! Login Value Object
//!
//! ユーザーの**ログイン名**（一意・大文字小文字を区別）。
//!
//! ## 不変条件
//! - 長さ: 設定された範囲内（文字数、デフォルト 5〜32）
//! - 先頭: アルファベット
//!
//! 長さを先に検査し、次に先頭文字を検査します。

use serde::Serialize;
use std::fmt;

/// Error returned when login validation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("invalid length of login")]
    InvalidLength,
    #[error("invalid format of login")]
    InvalidFormat,
}

/// Validated login
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Login(String);

impl Login {
    /// Validate and create a login
    ///
    /// ## Arguments
    /// * `raw` - ユーザー入力
    /// * `min_length` / `max_length` - 文字数の下限・上限（両端含む）
    ///
    /// ## Examples
    /// ```rust
    /// use auth::domain::value_object::login::{Login, LoginError};
    ///
    /// assert!(Login::new("spiderman125".to_string(), 5, 32).is_ok());
    /// assert_eq!(Login::new("cool".to_string(), 5, 32), Err(LoginError::InvalidLength));
    /// ```
    pub fn new(raw: String, min_length: usize, max_length: usize) -> Result<Self, LoginError> {
        let length = raw.chars().count();
        if length < min_length || length > max_length {
            return Err(LoginError::InvalidLength);
        }

        match raw.chars().next() {
            Some(first) if first.is_alphabetic() => Ok(Self(raw)),
            _ => Err(LoginError::InvalidFormat),
        }
    }

    /// Restore from database (already validated at registration)
    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
