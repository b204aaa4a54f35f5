//! # Spotify Integration Module
//!
//! This module is the integration layer between the catalog source and the
//! Spotify Web API. It owns all HTTP communication: the client-credentials
//! token exchange, bearer-authenticated catalog requests, pagination and the
//! mapping of raw catalog records into host tracks.
//!
//! ## Architecture
//!
//! ```text
//! Source Layer (identifier dispatch)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     ├── Tracks (single, batch, audio features, normalization)
//!     ├── Albums and Playlists (bounded pagination)
//!     ├── Artists (top tracks, artist info)
//!     └── Search (track search, recommendations, autocomplete)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Error Handling
//!
//! - A `404` from a catalog endpoint means "nothing there" and is reported as
//!   `Ok(None)`, which callers turn into a not-found result
//! - Any other non-2xx status, transport failure or undecodable body is a
//!   [`SpotifyError::UpstreamRequest`]
//! - Token failures surface as [`SpotifyError::UpstreamAuth`]
//! - Nothing is retried automatically
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials grant
//! - `GET /tracks/{id}`, `GET /tracks?ids=` - tracks
//! - `GET /audio-features/{id}` - audio features
//! - `GET /albums/{id}`, `GET /albums/{id}/tracks` - albums
//! - `GET /playlists/{id}`, `GET /playlists/{id}/tracks` - playlists
//! - `GET /artists/{id}`, `GET /artists/{id}/top-tracks` - artists
//! - `GET /search`, `GET /recommendations` - discovery

pub mod albums;
pub mod artists;
pub mod auth;
pub mod paging;
pub mod playlists;
pub mod search;
pub mod tracks;

use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    TenantId,
    error::{Result, SpotifyError},
    management::TokenManager,
};

/// Bearer-authenticated access to the Spotify Web API.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: TokenManager,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: impl Into<String>, tokens: TokenManager) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Absolute URL of an API path such as `tracks/abc`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Fetches and decodes `url` on behalf of `tenant`.
    ///
    /// Returns `Ok(None)` for `404` responses and empty bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, tenant: TenantId) -> Result<Option<T>> {
        self.get_json_query(url, &[] as &[(&str, &str)], tenant).await
    }

    /// Like [`SpotifyClient::get_json`], appending `query` as URL parameters.
    pub async fn get_json_query<T, Q>(&self, url: &str, query: &Q, tenant: TenantId) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let token = self.tokens.get_valid_token(tenant).await?;

        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SpotifyError::UpstreamRequest(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response
            .error_for_status()
            .map_err(|e| SpotifyError::UpstreamRequest(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| SpotifyError::UpstreamRequest(e.to_string()))?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }

        serde_json::from_str(trimmed).map(Some).map_err(|e| {
            SpotifyError::UpstreamRequest(format!("unexpected response from {}: {}", url, e))
        })
    }
}
