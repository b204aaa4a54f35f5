use crate::{
    TenantId,
    error::Result,
    spotify::{SpotifyClient, paging::Pages, tracks},
    types::{AlbumObject, CatalogCollection, CollectionKind, LoadResult, TrackObject, first_image},
};

/// Album track pages are fetched 50 at a time, the `tracks?ids=` batch limit.
pub const ALBUM_PAGE_SIZE: usize = 50;

/// Resolves an album into a collection of its tracks.
///
/// Album metadata comes from `albums/{id}`. Track ids are then paged from
/// `albums/{id}/tracks` and each page is resolved into full track objects
/// through `tracks?ids=`, so every track carries its album artwork and ISRC.
/// At most `page_limit` pages are fetched.
///
/// # Arguments
///
/// * `api` - Authenticated client
/// * `id` - Spotify album id
/// * `tenant` - Tenant whose token is used
/// * `preview` - Report 30 second previews
/// * `page_limit` - Maximum number of track pages
///
/// # Returns
///
/// - [`LoadResult::Collection`] of kind album
/// - [`LoadResult::NotFound`] for unknown albums or albums without playable tracks
///
/// # Errors
///
/// Token failures and failed requests, including any of the batch lookups.
pub async fn get_album(
    api: &SpotifyClient,
    id: &str,
    tenant: TenantId,
    preview: bool,
    page_limit: usize,
) -> Result<LoadResult> {
    let url = api.endpoint(&format!("albums/{}", id));
    let Some(album) = api.get_json::<AlbumObject>(&url, tenant).await? else {
        return Ok(LoadResult::NotFound);
    };

    let mut items = Vec::new();
    let mut pages: Pages<TrackObject> = Pages::new(
        api,
        api.endpoint(&format!("albums/{}/tracks", id)),
        tenant,
        ALBUM_PAGE_SIZE,
        page_limit,
    );

    while let Some(page) = pages.next_page().await? {
        let ids: Vec<String> = page
            .items
            .iter()
            .flatten()
            .filter(|t| !t.is_local)
            .filter_map(|t| t.id.clone())
            .collect();

        let full = tracks::get_several_tracks(api, &ids, tenant).await?;
        items.extend(tracks::normalize_all(&full.tracks, preview));
    }

    if items.is_empty() {
        return Ok(LoadResult::NotFound);
    }

    let mut collection = CatalogCollection::new(
        album.name.clone().unwrap_or_default(),
        Some(CollectionKind::Album),
    );
    collection.tracks = items;
    collection.url = album.external_urls.spotify.clone();
    collection.artwork_url = first_image(&album.images);
    collection.author = album.artists.first().and_then(|a| a.name.clone());
    collection.total_tracks = Some(album.total_tracks.unwrap_or(0));

    Ok(LoadResult::Collection(collection))
}
