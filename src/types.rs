use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

// Host-facing model

/// A single playable track in the form handed to the audio host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    pub author: String,
    pub length_ms: u64,
    pub identifier: String,
    pub is_stream: bool,
    pub uri: Option<String>,
    pub artwork_url: Option<String>,
    pub isrc: Option<String>,
    pub album_name: Option<String>,
    pub album_url: Option<String>,
    pub artist_url: Option<String>,
    pub artist_artwork_url: Option<String>,
    pub preview_url: Option<String>,
    pub is_preview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Album,
    Playlist,
    Artist,
    Recommendations,
}

/// A named, ordered list of tracks together with the metadata of its source.
///
/// Search results carry no kind and set `is_search_result`. Collections
/// returned by autocomplete carry metadata only and no tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCollection {
    pub name: String,
    pub tracks: Vec<CatalogItem>,
    pub kind: Option<CollectionKind>,
    pub is_search_result: bool,
    pub url: Option<String>,
    pub artwork_url: Option<String>,
    pub author: Option<String>,
    pub total_tracks: Option<u64>,
}

impl CatalogCollection {
    pub fn new(name: impl Into<String>, kind: Option<CollectionKind>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
            kind,
            is_search_result: false,
            url: None,
            artwork_url: None,
            author: None,
            total_tracks: None,
        }
    }
}

/// Outcome of resolving an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "load_type", content = "data", rename_all = "snake_case")]
pub enum LoadResult {
    Track(CatalogItem),
    Collection(CatalogCollection),
    NotFound,
}

impl LoadResult {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadResult::NotFound)
    }
}

/// Mixed autocomplete result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub tracks: Vec<CatalogItem>,
    pub albums: Vec<CatalogCollection>,
    pub artists: Vec<CatalogCollection>,
    pub playlists: Vec<CatalogCollection>,
    pub texts: Vec<String>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
            && self.albums.is_empty()
            && self.artists.is_empty()
            && self.playlists.is_empty()
            && self.texts.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistInfo {
    pub name: String,
    pub id: String,
    pub popularity: i32,
    pub genres: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackFeatures {
    pub acousticness: f64,
    pub analysis_url: Option<String>,
    pub danceability: f64,
    pub duration_ms: u64,
    pub energy: f64,
    pub id: Option<String>,
    pub instrumentalness: f64,
    pub key: i32,
    pub liveness: f64,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub tempo: f64,
    pub time_signature: i32,
    pub track_href: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
    pub valence: f64,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub artist: String,
    pub length: String,
    pub album: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub client_id: String,
    pub client_secret: String,
    pub country_code: Option<String>,
}

// Spotify Web API payloads

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    pub isrc: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistObject {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub external_urls: ExternalUrls,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumObject {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub external_urls: ExternalUrls,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "nullable")]
    pub artists: Vec<ArtistObject>,
    pub total_tracks: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub artists: Vec<ArtistObject>,
    pub duration_ms: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub external_urls: ExternalUrls,
    pub album: Option<AlbumObject>,
    pub external_ids: Option<ExternalIds>,
    pub preview_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub is_local: bool,
}

/// Spotify paging object. Null entries inside `items` are kept as `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paging<T> {
    #[serde(default = "Vec::new", deserialize_with = "nullable_vec")]
    pub items: Vec<Option<T>>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Owner {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackCount {
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistObject {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub external_urls: ExternalUrls,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Image>,
    pub owner: Option<Owner>,
    pub tracks: Option<TrackCount>,
}

/// Response shape shared by `tracks?ids=`, `artists/{id}/top-tracks` and
/// `recommendations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackList {
    #[serde(default = "Vec::new", deserialize_with = "nullable_vec")]
    pub tracks: Vec<Option<TrackObject>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<Paging<TrackObject>>,
    pub albums: Option<Paging<AlbumObject>>,
    pub artists: Option<Paging<ArtistObject>>,
    pub playlists: Option<Paging<PlaylistObject>>,
}

/// Returns the first image URL, if any.
pub fn first_image(images: &[Image]) -> Option<String> {
    images.first().and_then(|i| i.url.clone())
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default())
}
