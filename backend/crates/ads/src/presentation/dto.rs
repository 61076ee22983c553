//! API DTOs (Data Transfer Objects)

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use uuid::Uuid;

use crate::application::ListedAdvertisement;
use crate::domain::entities::Advertisement;
use crate::domain::listing_query::RawListingQuery;
use crate::domain::value_objects::AdvertisementInput;

// ============================================================================
// Creation
// ============================================================================

/// Create advertisement request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdvertisementRequest {
    pub title: String,
    pub description: String,
    pub image_address: String,
    pub price: i64,
}

impl From<CreateAdvertisementRequest> for AdvertisementInput {
    fn from(req: CreateAdvertisementRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            image_address: req.image_address,
            price: req.price,
        }
    }
}

/// Create advertisement response
#[derive(Debug, Clone, Serialize)]
pub struct CreateAdvertisementResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_address: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Advertisement> for CreateAdvertisementResponse {
    fn from(ad: Advertisement) -> Self {
        Self {
            id: ad.advertisement_id.into_uuid(),
            title: ad.title,
            description: ad.description,
            image_address: ad.image_address,
            price: ad.price,
            created_at: ad.created_at,
        }
    }
}

// ============================================================================
// Listing
// ============================================================================

/// `GET /api/ads` query string
///
/// Empty values (`?page=`) count as absent; non-empty values that are not
/// integers fail extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAdsQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort_by: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub order: Option<String>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

impl From<ListAdsQuery> for RawListingQuery {
    fn from(q: ListAdsQuery) -> Self {
        Self {
            page: q.page,
            page_size: q.page_size,
            min_price: q.min_price,
            max_price: q.max_price,
            sort_by: q.sort_by,
            order: q.order,
        }
    }
}

/// Listing entry
#[derive(Debug, Clone, Serialize)]
pub struct AdvertisementListingResponse {
    pub title: String,
    pub description: String,
    pub image_address: String,
    pub author_login: String,
    pub price: i64,
    /// Omitted for anonymous callers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
}

impl From<ListedAdvertisement> for AdvertisementListingResponse {
    fn from(item: ListedAdvertisement) -> Self {
        let ListedAdvertisement { listing, is_owner } = item;
        Self {
            title: listing.title,
            description: listing.description,
            image_address: listing.image_address,
            author_login: listing.author_login,
            price: listing.price,
            is_owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AdvertisementListing;
    use kernel::id::UserId;

    fn listed(is_owner: Option<bool>) -> ListedAdvertisement {
        ListedAdvertisement {
            listing: AdvertisementListing {
                title: "Bike".to_string(),
                description: "Almost new city bike".to_string(),
                image_address: "https://example.com/bike.png".to_string(),
                price: 15_000,
                author_login: "alice".to_string(),
                owner_id: UserId::new(),
            },
            is_owner,
        }
    }

    fn query(raw: &str) -> Result<ListAdsQuery, serde_urlencoded::de::Error> {
        serde_urlencoded::from_str(raw)
    }

    #[test]
    fn test_empty_query_values_are_absent() {
        let q = query("page=&page_size=&min_price=&max_price=&sort_by=&order=").unwrap();
        assert_eq!(q.page, None);
        assert_eq!(q.page_size, None);
        assert_eq!(q.min_price, None);
        assert_eq!(q.max_price, None);
        assert_eq!(q.sort_by, None);
        assert_eq!(q.order, None);
    }

    #[test]
    fn test_query_values_parse() {
        let q = query("page=2&min_price=100&sort_by=price").unwrap();
        assert_eq!(q.page, Some(2));
        assert_eq!(q.min_price, Some(100));
        assert_eq!(q.sort_by.as_deref(), Some("price"));
        assert!(query("page=abc").is_err());
    }

    #[test]
    fn test_is_owner_omitted_for_anonymous() {
        let json = serde_json::to_value(AdvertisementListingResponse::from(listed(None))).unwrap();
        assert!(json.get("is_owner").is_none());
        assert_eq!(json["author_login"], "alice");
    }

    #[test]
    fn test_is_owner_present_when_known() {
        let json =
            serde_json::to_value(AdvertisementListingResponse::from(listed(Some(false)))).unwrap();
        assert_eq!(json["is_owner"], false);
    }
}
