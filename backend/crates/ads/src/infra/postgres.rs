//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AdvertisementId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Advertisement, AdvertisementListing};
use crate::domain::listing_query::ListingQuery;
use crate::domain::repository::AdvertisementRepository;
use crate::domain::value_objects::AdvertisementInput;
use crate::error::AdsResult;

/// PostgreSQL-backed advertisement repository
#[derive(Clone)]
pub struct PgAdsRepository {
    pool: PgPool,
}

impl PgAdsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Advertisement Repository Implementation
// ============================================================================

impl AdvertisementRepository for PgAdsRepository {
    async fn create(&self, input: &AdvertisementInput, owner: UserId) -> AdsResult<Advertisement> {
        let row = sqlx::query_as::<_, AdvertisementRow>(
            r#"
            INSERT INTO advertisements (title, description, image_address, price, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, image_address, price, user_id, created_at, updated_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image_address)
        .bind(input.price)
        .bind(owner.into_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list(&self, query: &ListingQuery) -> AdsResult<Vec<AdvertisementListing>> {
        // Column and direction come from closed enums, never from user text
        let sql = format!(
            r#"
            SELECT a.title, a.description, a.image_address, a.price, a.user_id,
                   u.login AS author_login
            FROM advertisements a
            JOIN users u ON u.id = a.user_id
            WHERE a.price BETWEEN $1 AND $2
            ORDER BY a.{column} {order}, a.id {order}
            LIMIT $3 OFFSET $4
            "#,
            column = query.sort_by().column(),
            order = query.order().keyword(),
        );

        let rows = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(query.min_price())
            .bind(query.max_price())
            .bind(query.page_size())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdvertisementRow {
    id: Uuid,
    title: String,
    description: String,
    image_address: String,
    price: i64,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AdvertisementRow> for Advertisement {
    fn from(row: AdvertisementRow) -> Self {
        Advertisement {
            advertisement_id: AdvertisementId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            image_address: row.image_address,
            price: row.price,
            owner_id: UserId::from_uuid(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ListingRow {
    title: String,
    description: String,
    image_address: String,
    price: i64,
    user_id: Uuid,
    author_login: String,
}

impl From<ListingRow> for AdvertisementListing {
    fn from(row: ListingRow) -> Self {
        AdvertisementListing {
            title: row.title,
            description: row.description,
            image_address: row.image_address,
            price: row.price,
            author_login: row.author_login,
            owner_id: UserId::from_uuid(row.user_id),
        }
    }
}
