//! Configuration management for the Spotify catalog source.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files. The library itself only needs a
//! [`SpotifyConfig`]; the remaining accessors serve the binary (fallback
//! credentials and the address of the local HTTP server).
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use crate::error::{Result, SpotifyError};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_COUNTRY_CODE: &str = "US";
pub const DEFAULT_ALBUM_PAGE_LIMIT: usize = 6;
pub const DEFAULT_PLAYLIST_PAGE_LIMIT: usize = 6;
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Settings for a [`crate::source::SpotifySource`].
///
/// Base URLs carry no trailing slash. Page limits bound how many pages of an
/// album or playlist are fetched, whatever the upstream reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyConfig {
    pub api_url: String,
    pub token_url: String,
    pub album_page_limit: usize,
    pub playlist_page_limit: usize,
    pub default_country_code: String,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            album_page_limit: DEFAULT_ALBUM_PAGE_LIMIT,
            playlist_page_limit: DEFAULT_PLAYLIST_PAGE_LIMIT,
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl SpotifyConfig {
    /// Builds a configuration from the environment, falling back to defaults.
    ///
    /// # Environment Variables
    ///
    /// - `SPOTIFY_API_URL` - Web API base URL
    /// - `SPOTIFY_API_TOKEN_URL` - OAuth token endpoint
    /// - `SPOTSRC_ALBUM_PAGE_LIMIT` - maximum album track pages
    /// - `SPOTSRC_PLAYLIST_PAGE_LIMIT` - maximum playlist track pages
    /// - `SPOTSRC_COUNTRY_CODE` - market used when a tenant has none
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::Configuration`] when a page limit is not a
    /// positive integer.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            api_url: env_or("SPOTIFY_API_URL", &defaults.api_url)
                .trim_end_matches('/')
                .to_string(),
            token_url: env_or("SPOTIFY_API_TOKEN_URL", &defaults.token_url),
            album_page_limit: env_limit("SPOTSRC_ALBUM_PAGE_LIMIT", defaults.album_page_limit)?,
            playlist_page_limit: env_limit(
                "SPOTSRC_PLAYLIST_PAGE_LIMIT",
                defaults.playlist_page_limit,
            )?,
            default_country_code: env_or("SPOTSRC_COUNTRY_CODE", &defaults.default_country_code),
        })
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `spotsrc` directory if it doesn't exist and loads variables
/// from `spotsrc/.env` when that file is present:
/// - Linux: `~/.local/share/spotsrc/.env`
/// - macOS: `~/Library/Application Support/spotsrc/.env`
/// - Windows: `%LOCALAPPDATA%/spotsrc/.env`
///
/// A missing `.env` file is not an error; plain environment variables work
/// just as well.
pub async fn load_env() -> std::result::Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotsrc/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the address the local HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:8080`.
pub fn server_addr() -> String {
    env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the client ID registered for the fallback tenant, if configured.
///
/// Blank values count as unset.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_ID`.
pub fn spotify_client_id() -> Option<String> {
    env_non_empty("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the client secret registered for the fallback tenant, if configured.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_SECRET`. The secret should be kept
/// confidential and never exposed in logs or version control.
pub fn spotify_client_secret() -> Option<String> {
    env_non_empty("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_non_empty(key).unwrap_or_else(|| default.to_string())
}

fn env_limit(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => match raw.trim().parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(limit),
            _ => Err(SpotifyError::Configuration(format!(
                "{} must be a positive integer, got '{}'",
                key, raw
            ))),
        },
        _ => Ok(default),
    }
}
