use std::sync::Arc;

use axum::{Extension, extract::Query, response::Json};
use serde::Deserialize;

use crate::{
    TenantId,
    api::ApiError,
    source::SpotifySource,
    types::{LoadResult, SearchResult},
    utils::{self, SearchTypes},
};

#[derive(Debug, Deserialize)]
pub struct LoadParams {
    pub identifier: String,
    pub tenant: Option<TenantId>,
    #[serde(default)]
    pub preview: bool,
}

/// `GET /loaditems`
///
/// With `tenant`, `identifier` is resolved directly. Without it,
/// `identifier` is read as a host reference (`[spprev:]<tenant> <identifier>`).
pub async fn load_items(
    Query(params): Query<LoadParams>,
    Extension(source): Extension<Arc<SpotifySource>>,
) -> Result<Json<LoadResult>, ApiError> {
    let result = match params.tenant {
        Some(tenant) => {
            source
                .resolve(&params.identifier, tenant, params.preview)
                .await?
        }
        None => source.load_item(&params.identifier).await?,
    };
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub types: Option<String>,
    pub tenant: Option<TenantId>,
}

/// `GET /search`
///
/// `types` is a comma-separated list such as `track,album`; omitted means all.
pub async fn search(
    Query(params): Query<SearchParams>,
    Extension(source): Extension<Arc<SpotifySource>>,
) -> Result<Json<SearchResult>, ApiError> {
    let types = match params.types.as_deref() {
        Some(raw) => utils::parse_search_types(raw).map_err(ApiError::BadRequest)?,
        None => SearchTypes::default(),
    };

    let result = match params.tenant {
        Some(tenant) => source.autocomplete(&params.query, &types, tenant).await?,
        None => source.load_search(&params.query, &types).await?,
    };
    Ok(Json(result))
}
