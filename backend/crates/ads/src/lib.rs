//! Ads (Advertisements) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, listing query, validation services, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Authenticated advertisement creation with remote image validation
//! - Public paginated listing with price filter and sorting
//! - Per-viewer ownership flag for authenticated callers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::AdsConfig;
pub use error::{AdsError, AdsResult, ImageRejection};
pub use infra::postgres::PgAdsRepository;
pub use presentation::router::{ads_router, ads_router_generic};
