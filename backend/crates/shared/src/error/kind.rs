//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum: the marketplace error taxonomy and its
//! mapping onto HTTP status codes.

use serde::Serialize;

/// エラー種別の列挙体
///
/// マーケットプレイス全体で共通のエラー分類を定義します。
/// ルーティング層は種別だけを見てステータスコードを決定します。
///
/// | 種別 | 意味 | HTTP |
/// |---|---|---|
/// | `Validation` | 入力が不正・範囲外（クライアントに表示してよい） | 400 |
/// | `Conflict` | ログイン名の重複など、入力起因の競合 | 400 |
/// | `Unauthorized` | トークン欠如・不正・期限切れ、認証情報の誤り | 401 |
/// | `Dependency` | 永続化層・画像プローブなど外部協調者の失敗 | 500 |
/// | `Internal` | ハッシュ計算失敗などサーバー内部の失敗 | 500 |
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Conflict;
/// assert_eq!(kind.status_code(), 400);
/// assert_eq!(kind.as_str(), "Bad Request");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - 入力検証エラー
    Validation,
    /// 400 - 入力起因の競合（重複ログインなど）
    Conflict,
    /// 401 - 認証エラー
    Unauthorized,
    /// 500 - 外部依存（DB、画像プローブ）の失敗
    Dependency,
    /// 500 - サーバー内部エラー
    Internal,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Validation.status_code(), 400);
    /// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation | ErrorKind::Conflict => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Dependency | ErrorKind::Internal => 500,
        }
    }

    /// HTTP ステータスの理由フレーズを取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation | ErrorKind::Conflict => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Dependency | ErrorKind::Internal => "Internal Server Error",
        }
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// 5xx系のエラーは `true` を返します。
    /// これらのエラーの詳細はログにのみ記録し、クライアントには返しません。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// クライアント側のエラーかどうかを判定
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
