//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of marketplace vocabulary:
//! - The error taxonomy shared by every bounded context (validation, conflict,
//!   unauthorized, dependency, internal) and its HTTP rendering
//! - Typed identifiers for users and advertisements
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
