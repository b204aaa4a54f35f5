use std::{collections::BTreeSet, fmt, str::FromStr, sync::LazyLock};

use base64::{Engine, engine::general_purpose::STANDARD};
use regex::Regex;

use crate::{FALLBACK_TENANT, TenantId};

pub const SEARCH_PREFIX: &str = "spsearch:";
pub const RECOMMENDATIONS_PREFIX: &str = "sprec:";
pub const PREVIEW_PREFIX: &str = "spprev:";

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(https?://)(www\.)?open\.spotify\.com/((?<region>[a-zA-Z-]+)/)?(user/(?<user>[a-zA-Z0-9_-]+)/)?(?<type>track|album|playlist|artist)/(?<identifier>[a-zA-Z0-9_-]+)",
    )
    .expect("Failed to init Spotify URL RegEx")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Track,
    Album,
    Playlist,
    Artist,
}

impl FromStr for UrlKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "track" => Ok(UrlKind::Track),
            "album" => Ok(UrlKind::Album),
            "playlist" => Ok(UrlKind::Playlist),
            "artist" => Ok(UrlKind::Artist),
            other => Err(format!("unknown Spotify link type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyUrl {
    pub kind: UrlKind,
    pub id: String,
}

/// Extracts the link type and id from a Spotify web link.
///
/// Accepts `http(s)://[www.]open.spotify.com/[region/][user/<id>/]<type>/<id>`
/// anywhere in the input. The id ends at the first character outside
/// `[A-Za-z0-9_-]`, so share suffixes such as `?si=...` are ignored.
///
/// # Arguments
///
/// * `input` - A link, possibly surrounded by other text
///
/// # Returns
///
/// The link type and id, or `None` when no supported link is found.
///
/// # Example
///
/// ```
/// let url = parse_spotify_url("https://open.spotify.com/intl-en/track/abc123").unwrap();
/// assert_eq!(url.kind, UrlKind::Track);
/// assert_eq!(url.id, "abc123");
/// ```
pub fn parse_spotify_url(input: &str) -> Option<SpotifyUrl> {
    let caps = URL_PATTERN.captures(input)?;
    let kind = caps.name("type")?.as_str().parse::<UrlKind>().ok()?;
    let id = caps.name("identifier")?.as_str().to_string();
    Some(SpotifyUrl { kind, id })
}

/// Strips the preview prefix, reporting whether it was present.
pub fn strip_preview_prefix(reference: &str) -> (bool, &str) {
    match reference.strip_prefix(PREVIEW_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, reference),
    }
}

/// Splits a host reference of the form `<tenant> <identifier...>`.
///
/// Returns `None` when there are fewer than two space-separated parts or the
/// leading part is not an integer.
pub fn split_tenant_reference(reference: &str) -> Option<(TenantId, String)> {
    let parts: Vec<&str> = reference.split(' ').collect();
    if parts.len() < 2 {
        return None;
    }
    let tenant = parts[0].parse::<TenantId>().ok()?;
    Some((tenant, parts[1..].join(" ")))
}

/// Splits a search query that may start with a tenant id.
///
/// The leading word is consumed only when it parses as a [`TenantId`];
/// otherwise the whole query is kept and the fallback tenant is used.
///
/// # Example
///
/// ```
/// assert_eq!(split_tenant_query("7 daft punk"), (7, "daft punk".to_string()));
/// assert_eq!(split_tenant_query("daft punk"), (FALLBACK_TENANT, "daft punk".to_string()));
/// ```
pub fn split_tenant_query(query: &str) -> (TenantId, String) {
    if let Some((first, rest)) = query.split_once(' ') {
        if let Ok(tenant) = first.parse::<TenantId>() {
            return (tenant, rest.to_string());
        }
    }
    (FALLBACK_TENANT, query.to_string())
}

/// Builds the `Authorization` header value for the client-credentials grant.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let raw = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(raw.as_bytes()))
}

/// Formats a track length as `m:ss`.
pub fn format_length(length_ms: u64) -> String {
    let total_secs = length_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
    Text,
}

impl SearchType {
    /// Types Spotify can answer; `Text` is not among them.
    pub const SUPPORTED: [SearchType; 4] = [
        SearchType::Album,
        SearchType::Artist,
        SearchType::Playlist,
        SearchType::Track,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
            SearchType::Text => "text",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "album" => Ok(SearchType::Album),
            "artist" => Ok(SearchType::Artist),
            "playlist" => Ok(SearchType::Playlist),
            "track" => Ok(SearchType::Track),
            "text" => Ok(SearchType::Text),
            other => Err(format!(
                "invalid value '{}' (expected album, artist, playlist, track or text)",
                other
            )),
        }
    }
}

/// Ordered set of requested search types. An empty set means "all supported".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTypes(pub BTreeSet<SearchType>);

impl SearchTypes {
    pub fn iter(&self) -> impl Iterator<Item = SearchType> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, kind: SearchType) -> bool {
        self.0.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn supported() -> Self {
        SearchTypes(SearchType::SUPPORTED.into_iter().collect())
    }
}

impl FromIterator<SearchType> for SearchTypes {
    fn from_iter<I: IntoIterator<Item = SearchType>>(iter: I) -> Self {
        SearchTypes(iter.into_iter().collect())
    }
}

impl fmt::Display for SearchTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(SearchType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

/// Parses a comma-separated list of search types, e.g. `track,album`.
pub fn parse_search_types(s: &str) -> Result<SearchTypes, String> {
    if s.trim().is_empty() {
        return Err("search types cannot be empty".to_string());
    }

    let mut set = BTreeSet::new();
    for segment in s.split(',') {
        if segment.trim().is_empty() {
            return Err(format!("empty segment in '{}'", s));
        }
        set.insert(segment.parse::<SearchType>()?);
    }
    Ok(SearchTypes(set))
}
