//! User Entity
//!
//! Registered user together with the stored password hash.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{login::Login, user_password::UserPassword};

/// User entity
///
/// Produced by the persistence layer; identifiers and timestamps are
/// assigned by the database.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique, case-sensitive
    pub login: Login,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
