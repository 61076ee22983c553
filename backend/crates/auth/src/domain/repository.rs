//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{login::Login, user_password::UserPassword};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// ## Errors
    /// * `AuthError::LoginTaken` - login already registered
    async fn create(&self, login: &Login, password: &UserPassword) -> AuthResult<User>;

    /// Find user by exact (case-sensitive) login
    async fn find_by_login(&self, login: &str) -> AuthResult<Option<User>>;
}
