use crate::{
    TenantId, error, info, source::SpotifySource, types::CatalogCollection, utils::SearchTypes,
    warning,
};

use super::{spinner, track_table};

/// Runs an autocomplete search and prints each non-empty section.
pub async fn search(source: &SpotifySource, query: String, types: &SearchTypes, tenant: TenantId) {
    let pb = spinner(&format!("Searching for {}...", query));
    let result = source.autocomplete(&query, types, tenant).await;
    pb.finish_and_clear();

    let result = match result {
        Ok(result) => result,
        Err(e) => error!("Search failed: {}", e),
    };

    if result.is_empty() {
        warning!("No results for {}.", query);
        return;
    }

    if !result.tracks.is_empty() {
        info!("Tracks");
        println!("{}", track_table(&result.tracks));
    }

    print_section("Albums", &result.albums);
    print_section("Artists", &result.artists);
    print_section("Playlists", &result.playlists);
}

fn print_section(title: &str, collections: &[CatalogCollection]) {
    if collections.is_empty() {
        return;
    }

    info!("{}", title);
    for c in collections {
        let by = c.author.as_deref().map(|a| format!(" by {}", a)).unwrap_or_default();
        let link = c.url.as_deref().unwrap_or("-");
        println!("  {}{} <{}>", c.name, by, link);
    }
}
