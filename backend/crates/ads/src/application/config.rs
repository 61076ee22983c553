//! Application Configuration
//!
//! Limits for advertisement validation and listing.

use std::time::Duration;

/// Ads application configuration
#[derive(Debug, Clone)]
pub struct AdsConfig {
    /// Title length bounds (characters, inclusive)
    pub title_min_length: usize,
    pub title_max_length: usize,
    /// Description length bounds (characters, inclusive)
    pub description_min_length: usize,
    pub description_max_length: usize,
    /// Price bounds (inclusive); also the listing defaults
    pub min_price: i64,
    pub max_price: i64,
    /// Maximum reported image size in bytes (10 MiB)
    pub max_image_size: u64,
    /// Accepted `Content-Type` essences
    pub allowed_image_types: Vec<String>,
    /// Listing page size used when none (or an out-of-range one) is given
    pub default_page_size: i64,
    pub max_page_size: i64,
    /// Timeout for the image HEAD request
    pub image_probe_timeout: Duration,
}

impl Default for AdsConfig {
    fn default() -> Self {
        Self {
            title_min_length: 1,
            title_max_length: 50,
            description_min_length: 10,
            description_max_length: 750,
            min_price: 0,
            max_price: 99_999_999,
            max_image_size: 10 * 1024 * 1024,
            allowed_image_types: ["image/jpeg", "image/jpg", "image/png"]
                .into_iter()
                .map(String::from)
                .collect(),
            default_page_size: 25,
            max_page_size: 100,
            image_probe_timeout: Duration::from_secs(10),
        }
    }
}

impl AdsConfig {
    /// Whether `essence` (lowercase, parameters stripped) is an accepted image type
    pub fn is_allowed_image_type(&self, essence: &str) -> bool {
        self.allowed_image_types.iter().any(|t| t == essence)
    }
}
