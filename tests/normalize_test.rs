mod common;

use serde_json::json;
use spotsrc::spotify::tracks::{PREVIEW_LENGTH_MS, normalize, normalize_all};
use spotsrc::types::{PlaylistItem, TrackList, TrackObject};

fn track(value: serde_json::Value) -> TrackObject {
    serde_json::from_value(value).expect("valid track object")
}

#[test]
fn test_normalize_full_track() {
    let raw = track(common::track_json("abc", "Song", false));
    let item = normalize(&raw, false);

    assert_eq!(item.title, "Song");
    assert_eq!(item.author, "The Artist");
    assert_eq!(item.length_ms, 215_000);
    assert_eq!(item.identifier, "abc");
    assert!(!item.is_stream);
    assert!(!item.is_preview);
    assert_eq!(item.uri.as_deref(), Some("https://open.spotify.com/track/abc"));
    assert_eq!(item.artwork_url.as_deref(), Some("https://i.scdn.co/image/large"));
    assert_eq!(item.isrc.as_deref(), Some("ISRCabc"));
    assert_eq!(item.album_name.as_deref(), Some("The Album"));
    assert_eq!(item.album_url.as_deref(), Some("https://open.spotify.com/album/album1"));
    assert_eq!(item.artist_url.as_deref(), Some("https://open.spotify.com/artist/artist1"));
    assert_eq!(item.artist_artwork_url, None);
    assert_eq!(item.preview_url.as_deref(), Some("https://p.scdn.co/mp3-preview/abc"));
}

#[test]
fn test_normalize_preview_length() {
    let raw = track(common::track_json("abc", "Song", false));
    let item = normalize(&raw, true);

    assert_eq!(item.length_ms, PREVIEW_LENGTH_MS);
    assert_eq!(item.length_ms, 30_000);
    assert!(item.is_preview);
    // Everything else is unaffected by preview mode
    assert_eq!(item.identifier, "abc");
    assert_eq!(item.isrc.as_deref(), Some("ISRCabc"));
}

#[test]
fn test_normalize_missing_optional_fields() {
    let raw = track(json!({
        "id": "bare",
        "name": "Bare Track",
        "duration_ms": 1000,
        "artists": [{ "name": "Solo" }],
        "album": null,
        "external_ids": {},
        "preview_url": null
    }));
    let item = normalize(&raw, false);

    assert_eq!(item.title, "Bare Track");
    assert_eq!(item.author, "Solo");
    assert_eq!(item.length_ms, 1000);
    assert_eq!(item.uri, None);
    assert_eq!(item.artwork_url, None);
    assert_eq!(item.isrc, None);
    assert_eq!(item.album_name, None);
    assert_eq!(item.album_url, None);
    assert_eq!(item.artist_url, None);
    assert_eq!(item.preview_url, None);
}

#[test]
fn test_normalize_album_without_images() {
    let mut value = common::track_json("abc", "Song", false);
    value["album"]["images"] = json!([]);
    let item = normalize(&track(value), false);

    assert_eq!(item.artwork_url, None);
    assert_eq!(item.album_name.as_deref(), Some("The Album"));
}

#[test]
fn test_null_collections_are_tolerated() {
    let raw = track(json!({
        "id": "x",
        "name": "Nulls",
        "artists": null,
        "external_urls": null,
        "is_local": null
    }));
    let item = normalize(&raw, false);

    assert_eq!(item.author, "");
    assert_eq!(item.length_ms, 0);
    assert_eq!(item.uri, None);
}

#[test]
fn test_normalize_all_skips_local_and_null_entries() {
    let list: TrackList = serde_json::from_value(json!({
        "tracks": [
            common::track_json("a", "One", false),
            null,
            common::track_json("local", "Local File", true),
            common::track_json("b", "Two", false)
        ]
    }))
    .unwrap();

    let items = normalize_all(&list.tracks, false);
    let ids: Vec<&str> = items.iter().map(|i| i.identifier.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_normalize_all_playlist_items() {
    let items: Vec<PlaylistItem> = serde_json::from_value(json!([
        { "track": common::track_json("a", "One", false) },
        { "track": null },
        { "track": common::track_json("l", "Local", true) }
    ]))
    .unwrap();

    let normalized = normalize_all(items.iter().map(|i| &i.track), true);
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].identifier, "a");
    assert_eq!(normalized[0].length_ms, PREVIEW_LENGTH_MS);
}
