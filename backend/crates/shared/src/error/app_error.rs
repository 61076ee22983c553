//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// サーバー側エラーでクライアントに返す固定メッセージ
pub const GENERIC_SERVER_ERROR_MESSAGE: &str = "internal server error";

/// アプリケーション統一エラー型
///
/// 各境界づけられたコンテキスト（`auth`, `ads`）のエラーは最終的にこの型へ
/// 変換され、HTTP レスポンスとして描画されます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `source` - 元のエラー（オプション、ログ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::validation("invalid length of title");
/// assert_eq!(err.kind(), ErrorKind::Validation);
/// assert_eq!(err.client_message(), "invalid length of title");
///
/// // サーバー側エラーの詳細はクライアントに漏らさない
/// let err = AppError::dependency("connection refused");
/// assert_eq!(err.client_message(), "internal server error");
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// メッセージ
    message: Cow<'static, str>,
    /// 元のエラー（ログ用）
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// 400 入力検証エラー
    #[inline]
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// 400 競合エラー
    #[inline]
    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// 401 認証エラー
    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// 500 外部依存エラー
    #[inline]
    pub fn dependency(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Dependency, message)
    }

    /// 500 内部エラー
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// 元のエラーを設定（ログ用）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP ステータスコードを取得
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// 内部メッセージを取得（ログ用）
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// クライアントに返すメッセージを取得
    ///
    /// 5xx 系は常に [`GENERIC_SERVER_ERROR_MESSAGE`] を返します。
    #[inline]
    pub fn client_message(&self) -> &str {
        if self.kind.is_server_error() {
            GENERIC_SERVER_ERROR_MESSAGE
        } else {
            &self.message
        }
    }

    /// サーバーエラーかどうか
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
