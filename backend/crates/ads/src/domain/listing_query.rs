//! Listing Query Normalization
//!
//! Turns raw, possibly missing or out-of-range listing parameters into a
//! bounded [`ListingQuery`].
//!
//! Rules:
//! - `page` missing or `<= 0` becomes 1
//! - `page_size` missing, `<= 0` or above the maximum becomes the default
//! - unknown `sort_by` becomes `created_at`, unknown `order` becomes `desc`
//! - missing price bounds become the configured minimum / maximum price
//! - `min_price > max_price` is the only rejection

use crate::application::config::AdsConfig;
use crate::error::{AdsError, AdsResult};

/// Raw listing parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListingQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Price,
    CreatedAt,
}

impl SortBy {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("price") => SortBy::Price,
            _ => SortBy::CreatedAt,
        }
    }

    /// Column name (whitelisted for use in `ORDER BY`)
    pub fn column(&self) -> &'static str {
        match self {
            SortBy::Price => "price",
            SortBy::CreatedAt => "created_at",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    /// SQL keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Normalized listing query
///
/// Invariants: `page >= 1`, `1 <= page_size <= max_page_size`,
/// `min_price <= max_price`, `offset == (page - 1) * page_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    page: i64,
    page_size: i64,
    min_price: i64,
    max_price: i64,
    sort_by: SortBy,
    order: SortOrder,
    offset: i64,
}

impl ListingQuery {
    /// Normalize raw parameters
    ///
    /// ## Errors
    /// * `AdsError::InconsistentPriceBounds` - `min_price > max_price`
    ///
    /// ## Examples
    /// ```rust
    /// use ads::application::config::AdsConfig;
    /// use ads::domain::listing_query::{ListingQuery, RawListingQuery};
    ///
    /// let raw = RawListingQuery { page: Some(0), page_size: Some(500), ..Default::default() };
    /// let query = ListingQuery::normalize(raw, &AdsConfig::default()).unwrap();
    /// assert_eq!((query.page(), query.page_size(), query.offset()), (1, 25, 0));
    /// ```
    pub fn normalize(raw: RawListingQuery, config: &AdsConfig) -> AdsResult<Self> {
        let page_size = match raw.page_size {
            Some(size) if size > 0 && size <= config.max_page_size => size,
            _ => config.default_page_size,
        };

        // Largest page whose offset still fits in i64
        let max_page = (i64::MAX / page_size).saturating_add(1);
        let page = match raw.page {
            Some(page) if page > 0 => page.min(max_page),
            _ => 1,
        };

        let min_price = raw.min_price.unwrap_or(config.min_price);
        let max_price = raw.max_price.unwrap_or(config.max_price);
        if min_price > max_price {
            return Err(AdsError::InconsistentPriceBounds);
        }

        Ok(Self {
            page,
            page_size,
            min_price,
            max_price,
            sort_by: SortBy::parse(raw.sort_by.as_deref()),
            order: SortOrder::parse(raw.order.as_deref()),
            offset: (page - 1) * page_size,
        })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn min_price(&self) -> i64 {
        self.min_price
    }

    pub fn max_price(&self) -> i64 {
        self.max_price
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}
