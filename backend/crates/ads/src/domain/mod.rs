//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Advertisement, AdvertisementListing)
//! - Value objects (AdvertisementInput)
//! - Listing query normalization
//! - Domain services (advertisement validation)
//! - Repository traits (interfaces)

pub mod entities;
pub mod listing_query;
pub mod repository;
pub mod services;
pub mod value_objects;
