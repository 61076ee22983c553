//! Ads Router

use axum::{Router, routing::get};
use std::sync::Arc;

use auth::{Authenticator, TokenService, resolve_identity};
use platform::image_probe::{HttpImageProber, ImageProber};

use crate::application::AdsConfig;
use crate::domain::repository::AdvertisementRepository;
use crate::infra::postgres::PgAdsRepository;
use crate::presentation::handlers::{self, AdsAppState};

/// Create the Ads router with PostgreSQL repository and HTTP image prober
pub fn ads_router(
    repo: PgAdsRepository,
    prober: HttpImageProber,
    config: AdsConfig,
    tokens: Arc<TokenService>,
) -> Router {
    ads_router_generic(repo, prober, config, tokens)
}

/// Create a generic Ads router for any repository / prober implementation
///
/// Every route passes through [`resolve_identity`]: requests without an
/// `Authorization` header proceed anonymously, invalid tokens are rejected.
pub fn ads_router_generic<R, P>(
    repo: R,
    prober: P,
    config: AdsConfig,
    tokens: Arc<TokenService>,
) -> Router
where
    R: AdvertisementRepository + Clone + Send + Sync + 'static,
    P: ImageProber + Clone + Send + Sync + 'static,
{
    let state = AdsAppState {
        repo: Arc::new(repo),
        prober: Arc::new(prober),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/ads",
            get(handlers::list::<R, P>).post(handlers::create::<R, P>),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            Authenticator::new(tokens),
            resolve_identity,
        ))
        .with_state(state)
}
