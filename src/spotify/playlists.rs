use crate::{
    TenantId,
    error::Result,
    spotify::{SpotifyClient, paging::Pages, tracks},
    types::{CatalogCollection, CollectionKind, LoadResult, PlaylistItem, PlaylistObject, first_image},
};

/// Maximum page size of `playlists/{id}/tracks`.
pub const PLAYLIST_PAGE_SIZE: usize = 100;

/// Resolves a playlist into a collection of its playable tracks.
///
/// Items whose track is null (removed or unavailable) or a local file are
/// skipped. At most `page_limit` pages of 100 items are fetched.
///
/// # Returns
///
/// - [`LoadResult::Collection`] of kind playlist, authored by the owner
/// - [`LoadResult::NotFound`] for unknown playlists or playlists without playable tracks
///
/// # Errors
///
/// Token failures and failed page requests.
pub async fn get_playlist(
    api: &SpotifyClient,
    id: &str,
    tenant: TenantId,
    preview: bool,
    page_limit: usize,
) -> Result<LoadResult> {
    let url = api.endpoint(&format!("playlists/{}", id));
    let Some(playlist) = api.get_json::<PlaylistObject>(&url, tenant).await? else {
        return Ok(LoadResult::NotFound);
    };

    let mut items = Vec::new();
    let mut pages: Pages<PlaylistItem> = Pages::new(
        api,
        api.endpoint(&format!("playlists/{}/tracks", id)),
        tenant,
        PLAYLIST_PAGE_SIZE,
        page_limit,
    );

    while let Some(page) = pages.next_page().await? {
        let entries = page.items.iter().flatten().map(|item| &item.track);
        items.extend(tracks::normalize_all(entries, preview));
    }

    if items.is_empty() {
        return Ok(LoadResult::NotFound);
    }

    let mut collection = CatalogCollection::new(
        playlist.name.clone().unwrap_or_default(),
        Some(CollectionKind::Playlist),
    );
    collection.tracks = items;
    collection.url = playlist.external_urls.spotify.clone();
    collection.artwork_url = first_image(&playlist.images);
    collection.author = playlist.owner.as_ref().and_then(|o| o.display_name.clone());
    collection.total_tracks = Some(playlist.tracks.as_ref().and_then(|t| t.total).unwrap_or(0));

    Ok(LoadResult::Collection(collection))
}
