//! Caller identity after optional authentication

use kernel::id::UserId;

/// 任意認証の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// `Authorization` ヘッダーなし
    Anonymous,
    /// 有効なトークンを提示した利用者
    Authenticated(UserId),
}

impl Identity {
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated(user_id) => Some(*user_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated(_))
    }
}
