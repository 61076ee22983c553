//! Domain Services
//!
//! Advertisement validation. Checks run in a fixed order and stop at the
//! first failure: title, description, price, image.

use platform::image_probe::{ImageMetadata, ImageProber, ProbeError, parse_image_url};

use crate::application::config::AdsConfig;
use crate::domain::value_objects::AdvertisementInput;
use crate::error::{AdsError, AdsResult, ImageRejection};

/// Validate the textual and numeric fields (no network access)
pub fn validate_fields(input: &AdvertisementInput, config: &AdsConfig) -> AdsResult<()> {
    let title_len = input.title.chars().count();
    if title_len < config.title_min_length || title_len > config.title_max_length {
        return Err(AdsError::InvalidTitleLength);
    }

    let description_len = input.description.chars().count();
    if description_len < config.description_min_length
        || description_len > config.description_max_length
    {
        return Err(AdsError::InvalidDescriptionLength);
    }

    if input.price < config.min_price || input.price > config.max_price {
        return Err(AdsError::InvalidPrice);
    }

    Ok(())
}

/// Judge probed image metadata
///
/// The content type is compared by essence (parameters stripped, lowercase).
/// A missing `Content-Length` is accepted.
pub fn check_image_metadata(metadata: &ImageMetadata, config: &AdsConfig) -> AdsResult<()> {
    let essence = metadata
        .content_type
        .as_deref()
        .map(content_type_essence)
        .unwrap_or_default();
    if !config.is_allowed_image_type(&essence) {
        return Err(ImageRejection::InvalidFormat.into());
    }

    if let Some(length) = metadata.content_length {
        if length > config.max_image_size {
            return Err(ImageRejection::TooLarge.into());
        }
    }

    Ok(())
}

/// Full advertisement validation including the remote image probe
///
/// ## Errors
/// * validation variants of [`AdsError`] for rejected input
/// * `AdsError::ImageProbe` when the image host cannot be reached
pub async fn validate_advertisement<P>(
    input: &AdvertisementInput,
    prober: &P,
    config: &AdsConfig,
) -> AdsResult<()>
where
    P: ImageProber,
{
    validate_fields(input, config)?;

    parse_image_url(&input.image_address).map_err(|_| ImageRejection::InvalidAddress)?;

    let metadata = prober
        .probe(&input.image_address)
        .await
        .map_err(|e| match e {
            ProbeError::InvalidUrl(_) => AdsError::ImageRejected(ImageRejection::InvalidAddress),
            ProbeError::Unreachable(reason) => AdsError::ImageProbe(reason),
        })?;

    check_image_metadata(&metadata, config)
}

fn content_type_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
