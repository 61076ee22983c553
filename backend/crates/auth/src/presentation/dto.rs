//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;

// ============================================================================
// Registration
// ============================================================================

/// Registration / authentication request body
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub login: String,
    pub password: String,
}

/// Registration response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub login: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.into_uuid(),
            login: user.login.as_str().to_owned(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// Authentication response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
