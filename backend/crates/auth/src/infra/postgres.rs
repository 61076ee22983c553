//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{login::Login, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// Unique constraint on `users.login`
const USERS_LOGIN_KEY: &str = "users_login_key";

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, login: &Login, password: &UserPassword) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (login, hashed_password)
            VALUES ($1, $2)
            RETURNING id, login, hashed_password, created_at, updated_at
            "#,
        )
        .bind(login.as_str())
        .bind(password.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, Some(USERS_LOGIN_KEY)) {
                AuthError::LoginTaken
            } else {
                AuthError::Database(e)
            }
        })?;

        Ok(row.into_user())
    }

    async fn find_by_login(&self, login: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, login, hashed_password, created_at, updated_at
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    login: String,
    hashed_password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.id),
            login: Login::from_db(self.login),
            password_hash: UserPassword::from_db(self.hashed_password),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
