use crate::{TenantId, error, info, source::SpotifySource, warning};

use super::spinner;

/// Displays metadata about an artist or the audio features of a track.
///
/// Exactly one of `artist` and `features` is expected; `artist` wins when
/// both are provided.
///
/// # Example Usage
///
/// ```bash
/// # Artist popularity and genres
/// spotsrc info --artist 4NHQUGzhtTLFvgF5SZesLK
///
/// # Tempo, key, energy... of a track
/// spotsrc info --features 11dFghVXANMlKmJXsNCbNl
/// ```
///
/// # Output Examples
///
/// ```text
/// [o] Artist: Tove Lo (4NHQUGzhtTLFvgF5SZesLK)
/// [o] Popularity: 71
/// [o] Genres: electropop, pop, swedish pop
/// ```
pub async fn info(
    source: &SpotifySource,
    artist: Option<String>,
    features: Option<String>,
    tenant: TenantId,
) {
    if let Some(id) = artist {
        let pb = spinner("Fetching artist...");
        let result = source.artist_info(&id, tenant).await;
        pb.finish_and_clear();

        match result {
            Ok(Some(artist)) => {
                info!("Artist: {} ({})", artist.name, artist.id);
                info!("Popularity: {}", artist.popularity);
                info!(
                    "Genres: {}",
                    artist.genres.iter().cloned().collect::<Vec<_>>().join(", ")
                );
            }
            Ok(None) => warning!("No artist found for id {}.", id),
            Err(e) => error!("Failed to fetch artist {}: {}", id, e),
        }
        return;
    }

    if let Some(id) = features {
        let pb = spinner("Fetching audio features...");
        let result = source.track_features(&id, tenant).await;
        pb.finish_and_clear();

        match result {
            Ok(Some(f)) => {
                info!("Tempo: {:.1} BPM", f.tempo);
                info!("Key: {} (mode {})", f.key, f.mode);
                info!("Time signature: {}", f.time_signature);
                info!("Duration: {}", crate::utils::format_length(f.duration_ms));
                info!("Danceability: {:.3}", f.danceability);
                info!("Energy: {:.3}", f.energy);
                info!("Valence: {:.3}", f.valence);
                info!("Loudness: {:.1} dB", f.loudness);
                info!("Acousticness: {:.3}", f.acousticness);
                info!("Instrumentalness: {:.3}", f.instrumentalness);
                info!("Liveness: {:.3}", f.liveness);
                info!("Speechiness: {:.3}", f.speechiness);
            }
            Ok(None) => warning!("No audio features found for track {}.", id),
            Err(e) => error!("Failed to fetch audio features of {}: {}", id, e),
        }
        return;
    }

    warning!("Nothing to show. Pass --artist <id> or --features <id>.");
}
