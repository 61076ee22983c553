//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entities::{Advertisement, AdvertisementListing};
use crate::domain::listing_query::ListingQuery;
use crate::domain::value_objects::AdvertisementInput;
use crate::error::AdsResult;

/// Advertisement repository trait
#[trait_variant::make(AdvertisementRepository: Send)]
pub trait LocalAdvertisementRepository {
    /// Store a validated advertisement owned by `owner`
    async fn create(&self, input: &AdvertisementInput, owner: UserId) -> AdsResult<Advertisement>;

    /// One page of advertisements joined with their author's login
    ///
    /// Filtered by inclusive price bounds and ordered by the query's column
    /// and direction, ties broken by advertisement id.
    async fn list(&self, query: &ListingQuery) -> AdsResult<Vec<AdvertisementListing>>;
}
