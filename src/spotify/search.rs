use crate::{
    TenantId,
    error::{Result, SpotifyError},
    spotify::{SpotifyClient, tracks},
    types::{
        CatalogCollection, CollectionKind, LoadResult, SearchResponse, SearchResult, TrackList,
        first_image,
    },
    utils::{SearchType, SearchTypes},
};

/// Searches tracks matching `query`.
///
/// Returns an anonymous collection named `Search results for: <query>`, or
/// not-found when Spotify has no match.
pub async fn search_tracks(
    api: &SpotifyClient,
    query: &str,
    tenant: TenantId,
    preview: bool,
) -> Result<LoadResult> {
    let url = api.endpoint("search");
    let response: Option<SearchResponse> = api
        .get_json_query(&url, &[("q", query), ("type", "track")], tenant)
        .await?;

    let items = response
        .and_then(|r| r.tracks)
        .map(|page| tracks::normalize_all(&page.items, preview))
        .unwrap_or_default();

    if items.is_empty() {
        return Ok(LoadResult::NotFound);
    }

    let mut collection = CatalogCollection::new(format!("Search results for: {}", query), None);
    collection.is_search_result = true;
    collection.tracks = items;
    Ok(LoadResult::Collection(collection))
}

/// Fetches recommendations for a caller-supplied query string.
///
/// `query` (e.g. `seed_tracks=abc&limit=10`) is appended verbatim.
pub async fn get_recommendations(
    api: &SpotifyClient,
    query: &str,
    tenant: TenantId,
    preview: bool,
) -> Result<LoadResult> {
    let url = api.endpoint(&format!("recommendations?{}", query));
    let list: Option<TrackList> = api.get_json(&url, tenant).await?;

    let items = list
        .map(|l| tracks::normalize_all(&l.tracks, preview))
        .unwrap_or_default();

    if items.is_empty() {
        return Ok(LoadResult::NotFound);
    }

    let mut collection = CatalogCollection::new(
        "Spotify Recommendations:",
        Some(CollectionKind::Recommendations),
    );
    collection.tracks = items;
    Ok(LoadResult::Collection(collection))
}

/// Searches several result types at once for autocomplete.
///
/// An empty `types` set asks for albums, artists, playlists and tracks.
/// Albums, artists and playlists come back as collections without tracks.
///
/// # Errors
///
/// [`SpotifyError::InvalidArgument`] when `types` contains `text`, which
/// Spotify cannot answer.
pub async fn autocomplete(
    api: &SpotifyClient,
    query: &str,
    types: &SearchTypes,
    tenant: TenantId,
) -> Result<SearchResult> {
    if types.contains(SearchType::Text) {
        return Err(SpotifyError::InvalidArgument(
            "text is not a valid search type for Spotify".to_string(),
        ));
    }

    let types = if types.is_empty() {
        SearchTypes::supported()
    } else {
        types.clone()
    };

    let url = api.endpoint("search");
    let joined = types.to_string();
    let Some(response) = api
        .get_json_query::<SearchResponse, _>(&url, &[("q", query), ("type", joined.as_str())], tenant)
        .await?
    else {
        return Ok(SearchResult::default());
    };

    let mut result = SearchResult::default();

    if let Some(page) = response.albums {
        result.albums = page
            .items
            .iter()
            .flatten()
            .map(|album| {
                let mut c = CatalogCollection::new(
                    album.name.clone().unwrap_or_default(),
                    Some(CollectionKind::Album),
                );
                c.url = album.external_urls.spotify.clone();
                c.artwork_url = first_image(&album.images);
                c.author = album.artists.first().and_then(|a| a.name.clone());
                c.total_tracks = Some(album.total_tracks.unwrap_or(0));
                c
            })
            .collect();
    }

    if let Some(page) = response.artists {
        result.artists = page
            .items
            .iter()
            .flatten()
            .map(|artist| {
                let mut c = CatalogCollection::new(
                    artist.name.clone().unwrap_or_default(),
                    Some(CollectionKind::Artist),
                );
                c.url = artist.external_urls.spotify.clone();
                c.artwork_url = first_image(&artist.images);
                c
            })
            .collect();
    }

    if let Some(page) = response.playlists {
        result.playlists = page
            .items
            .iter()
            .flatten()
            .map(|playlist| {
                let mut c = CatalogCollection::new(
                    playlist.name.clone().unwrap_or_default(),
                    Some(CollectionKind::Playlist),
                );
                c.url = playlist.external_urls.spotify.clone();
                c.artwork_url = first_image(&playlist.images);
                c.total_tracks = Some(playlist.tracks.as_ref().and_then(|t| t.total).unwrap_or(0));
                c
            })
            .collect();
    }

    if let Some(page) = response.tracks {
        result.tracks = tracks::normalize_all(&page.items, false);
    }

    Ok(result)
}
