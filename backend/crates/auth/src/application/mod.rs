//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod credential_hasher;
pub mod sign_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use authenticate::Authenticator;
pub use config::AuthConfig;
pub use credential_hasher::CredentialHasher;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use token::{TokenError, TokenService};
