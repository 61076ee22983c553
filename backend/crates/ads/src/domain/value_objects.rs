//! Domain Value Objects
//!
//! Immutable value types for the ads domain.

/// Advertisement fields as submitted by the owner
///
/// Unvalidated; see [`crate::domain::services::validate_advertisement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertisementInput {
    pub title: String,
    pub description: String,
    pub image_address: String,
    pub price: i64,
}
