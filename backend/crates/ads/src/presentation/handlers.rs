//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Extension, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::{Identity, require_user};
use platform::image_probe::ImageProber;

use crate::application::{AdsConfig, CreateAdvertisementUseCase, ListAdvertisementsUseCase};
use crate::domain::repository::AdvertisementRepository;
use crate::error::{AdsError, AdsResult};
use crate::presentation::dto::{
    AdvertisementListingResponse, CreateAdvertisementRequest, CreateAdvertisementResponse,
    ListAdsQuery,
};

/// Shared state for ads handlers
#[derive(Clone)]
pub struct AdsAppState<R, P>
where
    R: AdvertisementRepository + Clone + Send + Sync + 'static,
    P: ImageProber + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub prober: Arc<P>,
    pub config: Arc<AdsConfig>,
}

/// POST /api/ads
///
/// Authentication is checked before the body is parsed.
pub async fn create<R, P>(
    State(state): State<AdsAppState<R, P>>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<CreateAdvertisementRequest>, JsonRejection>,
) -> AdsResult<(StatusCode, Json<CreateAdvertisementResponse>)>
where
    R: AdvertisementRepository + Clone + Send + Sync + 'static,
    P: ImageProber + Clone + Send + Sync + 'static,
{
    let owner = require_user(identity)?;
    let Json(req) = payload.map_err(|_| AdsError::InvalidRequestBody)?;

    let use_case = CreateAdvertisementUseCase::new(
        state.repo.clone(),
        state.prober.clone(),
        state.config.clone(),
    );

    let ad = use_case.execute(owner, req.into()).await?;

    Ok((StatusCode::CREATED, Json(ad.into())))
}

/// GET /api/ads
pub async fn list<R, P>(
    State(state): State<AdsAppState<R, P>>,
    Extension(identity): Extension<Identity>,
    query: Result<Query<ListAdsQuery>, QueryRejection>,
) -> AdsResult<Json<Vec<AdvertisementListingResponse>>>
where
    R: AdvertisementRepository + Clone + Send + Sync + 'static,
    P: ImageProber + Clone + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|_| AdsError::InvalidQuery)?;

    let use_case = ListAdvertisementsUseCase::new(state.repo.clone(), state.config.clone());

    let items = use_case.execute(identity, query.into()).await?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
