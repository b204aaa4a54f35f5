use crate::{
    TenantId,
    error::Result,
    spotify::{SpotifyClient, tracks},
    types::{ArtistInfo, CatalogCollection, CollectionKind, LoadResult, TrackList},
};

/// Resolves an artist into a collection of their top tracks.
///
/// Top tracks are market dependent; `country_code` is the tenant's market.
/// The collection is named after the first artist of the first track, which
/// is the requested artist for everything Spotify returns here.
///
/// # Arguments
///
/// * `api` - Authenticated client
/// * `id` - Spotify artist id
/// * `country_code` - Market of the tenant, e.g. `"SE"`
/// * `tenant` - Tenant whose token is used
/// * `preview` - Report 30 second previews
///
/// # Example
///
/// ```
/// let top = get_artist(&api, "4NHQUGzhtTLFvgF5SZesLK", "SE", tenant, false).await?;
/// ```
pub async fn get_artist(
    api: &SpotifyClient,
    id: &str,
    country_code: &str,
    tenant: TenantId,
    preview: bool,
) -> Result<LoadResult> {
    let url = api.endpoint(&format!("artists/{}/top-tracks", id));
    let list: Option<TrackList> = api
        .get_json_query(&url, &[("market", country_code)], tenant)
        .await?;

    let Some(list) = list else {
        return Ok(LoadResult::NotFound);
    };

    let items = tracks::normalize_all(&list.tracks, preview);
    let Some(first) = items.first() else {
        return Ok(LoadResult::NotFound);
    };

    let artist_name = first.author.clone();
    let mut collection = CatalogCollection::new(
        format!("{}'s Top Tracks", artist_name),
        Some(CollectionKind::Artist),
    );
    collection.url = first.artist_url.clone();
    collection.artwork_url = first.artwork_url.clone();
    collection.author = Some(artist_name);
    collection.total_tracks = Some(items.len() as u64);
    collection.tracks = items;

    Ok(LoadResult::Collection(collection))
}

/// Fetches artist metadata; `None` when the artist does not exist.
pub async fn get_artist_info(
    api: &SpotifyClient,
    id: &str,
    tenant: TenantId,
) -> Result<Option<ArtistInfo>> {
    let url = api.endpoint(&format!("artists/{}", id));
    api.get_json(&url, tenant).await
}
