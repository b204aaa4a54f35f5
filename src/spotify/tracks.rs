use crate::{
    TenantId,
    error::Result,
    spotify::SpotifyClient,
    types::{CatalogItem, LoadResult, TrackFeatures, TrackList, TrackObject, first_image},
};

/// Length reported for every track resolved in preview mode.
pub const PREVIEW_LENGTH_MS: u64 = 30_000;

/// Maps a raw Spotify track record to a host track.
///
/// Absent optional fields (artwork, ISRC, preview URL, album) stay unset.
/// Callers are responsible for dropping local files beforehand.
pub fn normalize(track: &TrackObject, preview: bool) -> CatalogItem {
    let artist = track.artists.first();
    let album = track.album.as_ref();

    CatalogItem {
        title: track.name.clone().unwrap_or_default(),
        author: artist.and_then(|a| a.name.clone()).unwrap_or_default(),
        length_ms: if preview {
            PREVIEW_LENGTH_MS
        } else {
            track.duration_ms.unwrap_or(0)
        },
        identifier: track.id.clone().unwrap_or_default(),
        is_stream: false,
        uri: track.external_urls.spotify.clone(),
        artwork_url: album.and_then(|a| first_image(&a.images)),
        isrc: track.external_ids.as_ref().and_then(|ids| ids.isrc.clone()),
        album_name: album.and_then(|a| a.name.clone()),
        album_url: album.and_then(|a| a.external_urls.spotify.clone()),
        artist_url: artist.and_then(|a| a.external_urls.spotify.clone()),
        artist_artwork_url: artist.and_then(|a| first_image(&a.images)),
        preview_url: track.preview_url.clone(),
        is_preview: preview,
    }
}

/// Normalizes a list of raw records, skipping null entries and local files.
pub fn normalize_all<'a, I>(tracks: I, preview: bool) -> Vec<CatalogItem>
where
    I: IntoIterator<Item = &'a Option<TrackObject>>,
{
    tracks
        .into_iter()
        .flatten()
        .filter(|t| !t.is_local)
        .map(|t| normalize(t, preview))
        .collect()
}

/// Resolves a single track by id.
///
/// # Returns
///
/// - [`LoadResult::Track`] with the normalized track
/// - [`LoadResult::NotFound`] when Spotify answers 404
pub async fn get_track(
    api: &SpotifyClient,
    id: &str,
    tenant: TenantId,
    preview: bool,
) -> Result<LoadResult> {
    let url = api.endpoint(&format!("tracks/{}", id));
    let track: Option<TrackObject> = api.get_json(&url, tenant).await?;

    Ok(match track {
        Some(track) => LoadResult::Track(normalize(&track, preview)),
        None => LoadResult::NotFound,
    })
}

/// Fetches full track objects for up to 50 ids in one request.
///
/// An empty `ids` slice returns an empty list without any request. Unknown
/// ids come back as `None` entries in the list.
pub async fn get_several_tracks(
    api: &SpotifyClient,
    ids: &[String],
    tenant: TenantId,
) -> Result<TrackList> {
    if ids.is_empty() {
        return Ok(TrackList::default());
    }

    let url = api.endpoint("tracks");
    let joined = ids.join(",");
    let list: Option<TrackList> = api
        .get_json_query(&url, &[("ids", joined.as_str())], tenant)
        .await?;
    Ok(list.unwrap_or_default())
}

/// Fetches the audio features of a track; `None` when Spotify has none.
pub async fn get_track_features(
    api: &SpotifyClient,
    id: &str,
    tenant: TenantId,
) -> Result<Option<TrackFeatures>> {
    let url = api.endpoint(&format!("audio-features/{}", id));
    api.get_json(&url, tenant).await
}
