use crate::{
    TenantId, error, info, source::SpotifySource, success,
    types::{CatalogCollection, CatalogItem, LoadResult},
    utils, warning,
};

use super::{spinner, track_table};

/// Resolves an identifier and prints the result.
///
/// A `spprev:` prefix on the identifier switches to preview mode, the same as
/// passing `--preview`. With `json` the raw result is printed instead of a
/// table.
pub async fn resolve(
    source: &SpotifySource,
    identifier: String,
    tenant: TenantId,
    preview: bool,
    json: bool,
) {
    let (prefixed, identifier) = utils::strip_preview_prefix(&identifier);

    let pb = spinner(&format!("Resolving {}...", identifier));
    let result = source.resolve(identifier, tenant, preview || prefixed).await;
    pb.finish_and_clear();

    let loaded = match result {
        Ok(loaded) => loaded,
        Err(e) => error!("Failed to resolve {}: {}", identifier, e),
    };

    if json {
        match serde_json::to_string_pretty(&loaded) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Cannot serialize result: {}", e),
        }
        return;
    }

    match loaded {
        LoadResult::Track(track) => print_track(&track),
        LoadResult::Collection(collection) => print_collection(&collection),
        LoadResult::NotFound => warning!("Nothing playable found for {}.", identifier),
    }
}

fn print_track(track: &CatalogItem) {
    success!("{} - {}", track.author, track.title);
    info!("Length: {}", utils::format_length(track.length_ms));
    if let Some(album) = &track.album_name {
        info!("Album: {}", album);
    }
    if let Some(isrc) = &track.isrc {
        info!("ISRC: {}", isrc);
    }
    if let Some(uri) = &track.uri {
        info!("Link: {}", uri);
    }
}

fn print_collection(collection: &CatalogCollection) {
    match &collection.author {
        Some(author) => success!("{} by {}", collection.name, author),
        None => success!("{}", collection.name),
    }

    if let Some(total) = collection.total_tracks {
        if total as usize > collection.tracks.len() {
            warning!(
                "Showing {} of {} tracks.",
                collection.tracks.len(),
                total
            );
        }
    }

    println!("{}", track_table(&collection.tracks));
}
