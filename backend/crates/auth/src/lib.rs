//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, token service, credential hashing
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration with login + password (entropy-gated)
//! - Authentication issuing short-lived signed access tokens
//! - Bearer-token identity resolution for other routers
//!
//! ## Security Model
//! - Passwords hashed with Argon2id on the blocking pool
//! - Tokens are HMAC-SHA256 signed, stateless and expire after a fixed TTL
//! - Unknown login and wrong password produce the same response

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuthConfig, Authenticator, TokenService};
pub use domain::value_object::identity::Identity;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{require_user, resolve_identity};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
