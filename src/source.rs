//! Identifier dispatch and the entry points used by an audio host.
//!
//! [`SpotifySource`] owns everything a host needs: the tenant credential
//! registry, the token manager and the HTTP client. Hosts either call
//! [`SpotifySource::resolve`] with an explicit tenant, or hand over their raw
//! reference strings to [`SpotifySource::load_item`] and
//! [`SpotifySource::load_search`].

use std::sync::Arc;

use reqwest::Client;

use crate::{
    TenantId,
    config::SpotifyConfig,
    error::Result,
    management::{CredentialStore, TenantCredentials, TokenManager},
    spotify::{SpotifyClient, albums, artists, playlists, search, tracks},
    types::{ArtistInfo, LoadResult, SearchResult, TrackFeatures},
    utils::{self, RECOMMENDATIONS_PREFIX, SEARCH_PREFIX, SearchTypes, UrlKind},
};

/// Name under which hosts register this source.
pub const SOURCE_NAME: &str = "spotify";

/// Spotify catalog source shared by every tenant of a host.
pub struct SpotifySource {
    config: SpotifyConfig,
    credentials: Arc<CredentialStore>,
    api: SpotifyClient,
}

impl SpotifySource {
    /// Builds a source with a default HTTP client and no registered tenants.
    pub fn new(config: SpotifyConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Builds a source on top of a preconfigured HTTP client (proxy,
    /// timeouts, user agent).
    pub fn with_client(config: SpotifyConfig, http: Client) -> Self {
        let credentials = Arc::new(CredentialStore::new());
        let tokens = TokenManager::new(
            Arc::clone(&credentials),
            http.clone(),
            config.token_url.clone(),
        );
        let api = SpotifyClient::new(http, config.api_url.clone(), tokens);

        Self {
            config,
            credentials,
            api,
        }
    }

    /// Always [`SOURCE_NAME`].
    pub fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    /// Active configuration, page limits included.
    pub fn config(&self) -> &SpotifyConfig {
        &self.config
    }

    /// Registry of tenant credentials and cached tokens.
    pub fn credentials(&self) -> &Arc<CredentialStore> {
        &self.credentials
    }

    /// Token manager backing every catalog request.
    pub fn tokens(&self) -> &TokenManager {
        self.api.tokens()
    }

    /// Caps album track pages (50 tracks each). `0` behaves like `1`.
    pub fn set_album_page_limit(&mut self, limit: usize) {
        self.config.album_page_limit = limit;
    }

    /// Caps playlist item pages (100 items each). `0` behaves like `1`.
    pub fn set_playlist_page_limit(&mut self, limit: usize) {
        self.config.playlist_page_limit = limit;
    }

    /// Registers (or replaces) the app credentials of `tenant`.
    ///
    /// An empty or missing country code falls back to the configured default.
    /// Registering again for the same tenant drops its cached token.
    ///
    /// # Arguments
    ///
    /// * `client_id` - Spotify app client id
    /// * `client_secret` - Spotify app client secret
    /// * `country_code` - Market for artist top tracks
    /// * `tenant` - Tenant to register, [`crate::FALLBACK_TENANT`] for the
    ///   shared fallback
    pub fn register_credentials(
        &self,
        client_id: &str,
        client_secret: &str,
        country_code: Option<&str>,
        tenant: TenantId,
    ) {
        let country_code = country_code
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.config.default_country_code);

        self.credentials.put(
            tenant,
            TenantCredentials::new(client_id, client_secret, country_code),
        );
    }

    /// Removes the credentials of `tenant`, reporting whether any existed.
    pub fn unregister_credentials(&self, tenant: TenantId) -> bool {
        self.credentials.remove(tenant)
    }

    /// Returns a valid bearer token for `tenant`, refreshing it if needed.
    ///
    /// # Errors
    ///
    /// - [`crate::SpotifyError::Configuration`] when neither `tenant` nor the
    ///   fallback tenant has credentials
    /// - [`crate::SpotifyError::UpstreamAuth`] when the token exchange fails
    pub async fn get_token(&self, tenant: TenantId) -> Result<String> {
        self.api.tokens().get_valid_token(tenant).await
    }

    /// Resolves an identifier on behalf of `tenant`.
    ///
    /// Accepted identifiers, checked in order:
    /// 1. `spsearch:<query>` - track search
    /// 2. `sprec:<query-string>` - recommendations, query passed verbatim
    /// 3. `https://open.spotify.com/[region/][user/<id>/]<type>/<id>` with
    ///    type `track`, `album`, `playlist` or `artist`
    ///
    /// Anything else, and any well-formed identifier without playable
    /// tracks, yields [`LoadResult::NotFound`].
    ///
    /// # Arguments
    ///
    /// * `identifier` - Link or prefixed query
    /// * `tenant` - Tenant whose credentials are used
    /// * `preview` - Report every track with a 30 second length
    ///
    /// # Errors
    ///
    /// - [`crate::SpotifyError::Configuration`] when no credentials apply
    /// - [`crate::SpotifyError::UpstreamAuth`] when no token can be obtained
    /// - [`crate::SpotifyError::UpstreamRequest`] when a catalog request fails
    ///
    /// # Example
    ///
    /// ```
    /// let result = source
    ///     .resolve("https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy", FALLBACK_TENANT, false)
    ///     .await?;
    /// ```
    pub async fn resolve(&self, identifier: &str, tenant: TenantId, preview: bool) -> Result<LoadResult> {
        if let Some(query) = identifier.strip_prefix(SEARCH_PREFIX) {
            return search::search_tracks(&self.api, query.trim(), tenant, preview).await;
        }

        if let Some(query) = identifier.strip_prefix(RECOMMENDATIONS_PREFIX) {
            return search::get_recommendations(&self.api, query.trim(), tenant, preview).await;
        }

        let Some(url) = utils::parse_spotify_url(identifier) else {
            return Ok(LoadResult::NotFound);
        };

        match url.kind {
            UrlKind::Track => tracks::get_track(&self.api, &url.id, tenant, preview).await,
            UrlKind::Album => {
                albums::get_album(&self.api, &url.id, tenant, preview, self.config.album_page_limit)
                    .await
            }
            UrlKind::Playlist => {
                playlists::get_playlist(
                    &self.api,
                    &url.id,
                    tenant,
                    preview,
                    self.config.playlist_page_limit,
                )
                .await
            }
            UrlKind::Artist => {
                let country_code = self.country_code(tenant).await;
                artists::get_artist(&self.api, &url.id, &country_code, tenant, preview).await
            }
        }
    }

    /// Resolves a raw host reference: `[spprev:]<tenant> <identifier>`.
    ///
    /// The `spprev:` prefix switches to preview mode. References without a
    /// leading integer tenant resolve to [`LoadResult::NotFound`].
    pub async fn load_item(&self, reference: &str) -> Result<LoadResult> {
        let (preview, reference) = utils::strip_preview_prefix(reference);
        let Some((tenant, identifier)) = utils::split_tenant_reference(reference) else {
            return Ok(LoadResult::NotFound);
        };
        self.resolve(&identifier, tenant, preview).await
    }

    /// Runs autocomplete for a raw host query: `[<tenant> ][spsearch:]<query>`.
    ///
    /// Queries without a leading integer tenant use the fallback tenant.
    pub async fn load_search(&self, query: &str, types: &SearchTypes) -> Result<SearchResult> {
        let (tenant, query) = utils::split_tenant_query(query);
        let query = query.strip_prefix(SEARCH_PREFIX).unwrap_or(&query);
        self.autocomplete(query.trim(), types, tenant).await
    }

    /// Searches albums, artists, playlists and tracks for `query`.
    ///
    /// See [`search::autocomplete`] for the handling of `types`.
    pub async fn autocomplete(&self, query: &str, types: &SearchTypes, tenant: TenantId) -> Result<SearchResult> {
        search::autocomplete(&self.api, query, types, tenant).await
    }

    /// Artist name, popularity and genres; `None` for unknown artists.
    pub async fn artist_info(&self, id: &str, tenant: TenantId) -> Result<Option<ArtistInfo>> {
        artists::get_artist_info(&self.api, id, tenant).await
    }

    /// Audio features of a track; `None` when Spotify has none.
    pub async fn track_features(&self, id: &str, tenant: TenantId) -> Result<Option<TrackFeatures>> {
        tracks::get_track_features(&self.api, id, tenant).await
    }

    /// Market of `tenant` (or the fallback tenant), else the configured default.
    pub async fn country_code(&self, tenant: TenantId) -> String {
        match self.credentials.country_code(tenant).await {
            Some(code) => code,
            None => self.config.default_country_code.clone(),
        }
    }
}
