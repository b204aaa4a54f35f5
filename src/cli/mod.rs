//! # CLI Module
//!
//! This module provides the command-line interface of `spotsrc`. Each command
//! builds on a [`SpotifySource`] configured from the environment, with the
//! fallback tenant's credentials taken from `SPOTIFY_API_AUTH_CLIENT_ID` and
//! `SPOTIFY_API_AUTH_CLIENT_SECRET`.
//!
//! ## Commands
//!
//! - [`resolve`] - Resolves a link, `spsearch:` or `sprec:` identifier
//! - [`search`] - Autocomplete across albums, artists, playlists and tracks
//! - [`info`] - Artist metadata and track audio features
//! - [`serve`] - Exposes the source over the local HTTP API
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotsrc resolve https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy
//! spotsrc resolve "spsearch:daft punk" --preview
//! spotsrc search "daft punk" --type album,artist
//! spotsrc info --artist 4tZwfgrHOc3mvqYlEYSvVi
//! spotsrc serve
//! ```
//!
//! Long-running calls show a spinner; results are rendered as tables or, with
//! `--json`, as the serialized result.

mod info;
mod resolve;
mod search;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    FALLBACK_TENANT, Res, config,
    config::SpotifyConfig,
    source::SpotifySource,
    types::{CatalogItem, TrackTableRow},
    utils, warning,
};

pub use info::info;
pub use resolve::resolve;
pub use search::search;
pub use serve::serve;

/// Builds a source from the environment and registers the fallback tenant.
///
/// Missing fallback credentials are reported but not fatal: tenants can still
/// be registered later through the HTTP API.
pub fn source_from_env() -> Res<SpotifySource> {
    let source = SpotifySource::new(SpotifyConfig::from_env()?);

    match (config::spotify_client_id(), config::spotify_client_secret()) {
        (Some(id), Some(secret)) => {
            source.register_credentials(&id, &secret, None, FALLBACK_TENANT);
        }
        _ => warning!(
            "SPOTIFY_API_AUTH_CLIENT_ID / SPOTIFY_API_AUTH_CLIENT_SECRET not set; no fallback credentials registered."
        ),
    }

    Ok(source)
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

pub(crate) fn track_table(tracks: &[CatalogItem]) -> Table {
    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            title: t.title.clone(),
            artist: t.author.clone(),
            length: utils::format_length(t.length_ms),
            album: t.album_name.clone().unwrap_or_default(),
        })
        .collect();

    Table::new(rows)
}
