//! Domain Entities
//!
//! Core business entities for advertisements.

use chrono::{DateTime, Utc};
use kernel::id::{AdvertisementId, UserId};

/// Stored advertisement
#[derive(Debug, Clone)]
pub struct Advertisement {
    pub advertisement_id: AdvertisementId,
    pub title: String,
    pub description: String,
    pub image_address: String,
    pub price: i64,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Advertisement joined with its author's login, as shown in listings
#[derive(Debug, Clone)]
pub struct AdvertisementListing {
    pub title: String,
    pub description: String,
    pub image_address: String,
    pub price: i64,
    pub author_login: String,
    pub owner_id: UserId,
}

impl AdvertisementListing {
    /// Ownership flag for an authenticated viewer
    pub fn is_owned_by(&self, viewer: UserId) -> bool {
        self.owner_id == viewer
    }
}
