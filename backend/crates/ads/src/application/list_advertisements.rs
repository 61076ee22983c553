//! List Advertisements Use Case

use std::sync::Arc;

use auth::Identity;

use crate::application::config::AdsConfig;
use crate::domain::entities::AdvertisementListing;
use crate::domain::listing_query::{ListingQuery, RawListingQuery};
use crate::domain::repository::AdvertisementRepository;
use crate::error::AdsResult;

/// A listing entry as seen by a particular viewer
#[derive(Debug, Clone)]
pub struct ListedAdvertisement {
    pub listing: AdvertisementListing,
    /// `None` for anonymous viewers
    pub is_owner: Option<bool>,
}

/// List advertisements use case
pub struct ListAdvertisementsUseCase<R>
where
    R: AdvertisementRepository,
{
    repo: Arc<R>,
    config: Arc<AdsConfig>,
}

impl<R> ListAdvertisementsUseCase<R>
where
    R: AdvertisementRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AdsConfig>) -> Self {
        Self { repo, config }
    }

    /// Normalize the query, fetch one page and annotate ownership
    ///
    /// ## Errors
    /// * `AdsError::InconsistentPriceBounds` - `min_price > max_price`
    pub async fn execute(
        &self,
        viewer: Identity,
        raw: RawListingQuery,
    ) -> AdsResult<Vec<ListedAdvertisement>> {
        let query = ListingQuery::normalize(raw, &self.config)?;

        let listings = self.repo.list(&query).await?;

        tracing::debug!(
            page = query.page(),
            page_size = query.page_size(),
            count = listings.len(),
            "Advertisements listed"
        );

        Ok(listings
            .into_iter()
            .map(|listing| {
                let is_owner = viewer.user_id().map(|id| listing.is_owned_by(id));
                ListedAdvertisement { listing, is_owner }
            })
            .collect())
    }
}
