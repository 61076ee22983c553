//! Create Advertisement Use Case
//!
//! Validates a submitted advertisement (including the remote image probe)
//! and stores it under the caller's ownership.

use std::sync::Arc;

use kernel::id::UserId;
use platform::image_probe::ImageProber;

use crate::application::config::AdsConfig;
use crate::domain::entities::Advertisement;
use crate::domain::repository::AdvertisementRepository;
use crate::domain::services::validate_advertisement;
use crate::domain::value_objects::AdvertisementInput;
use crate::error::AdsResult;

/// Create advertisement use case
pub struct CreateAdvertisementUseCase<R, P>
where
    R: AdvertisementRepository,
    P: ImageProber,
{
    repo: Arc<R>,
    prober: Arc<P>,
    config: Arc<AdsConfig>,
}

impl<R, P> CreateAdvertisementUseCase<R, P>
where
    R: AdvertisementRepository,
    P: ImageProber,
{
    pub fn new(repo: Arc<R>, prober: Arc<P>, config: Arc<AdsConfig>) -> Self {
        Self {
            repo,
            prober,
            config,
        }
    }

    /// ## Arguments
    /// * `owner` - 認証済みの投稿者
    /// * `input` - 未検証の広告フィールド
    ///
    /// ## Returns
    /// 永続化された広告（ID とタイムスタンプはストアが採番）
    pub async fn execute(&self, owner: UserId, input: AdvertisementInput) -> AdsResult<Advertisement> {
        validate_advertisement(&input, self.prober.as_ref(), &self.config).await?;

        let ad = self.repo.create(&input, owner).await?;

        tracing::info!(
            advertisement_id = %ad.advertisement_id,
            owner_id = %ad.owner_id,
            price = ad.price,
            "Advertisement created"
        );

        Ok(ad)
    }
}
