use spotsrc::FALLBACK_TENANT;
use spotsrc::utils::*;

fn parsed(input: &str) -> Option<(UrlKind, String)> {
    parse_spotify_url(input).map(|url| (url.kind, url.id))
}

#[test]
fn test_parse_spotify_url_plain_links() {
    assert_eq!(
        parsed("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"),
        Some((UrlKind::Track, "4uLU6hMCjMI75M1A2tKUQC".to_string()))
    );
    assert_eq!(
        parsed("https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy"),
        Some((UrlKind::Album, "4aawyAB9vmqN3uQ7FjRGTy".to_string()))
    );
    assert_eq!(
        parsed("http://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"),
        Some((UrlKind::Playlist, "37i9dQZF1DXcBWIGoYBM5M".to_string()))
    );
    assert_eq!(
        parsed("https://www.open.spotify.com/artist/0OdUWJ0sBjDrqHygGUXeCF"),
        Some((UrlKind::Artist, "0OdUWJ0sBjDrqHygGUXeCF".to_string()))
    );
}

#[test]
fn test_parse_spotify_url_region_segment() {
    assert_eq!(
        parsed("https://open.spotify.com/intl-en/track/abc123"),
        Some((UrlKind::Track, "abc123".to_string()))
    );
    assert_eq!(
        parsed("https://open.spotify.com/de/album/xyz"),
        Some((UrlKind::Album, "xyz".to_string()))
    );
}

#[test]
fn test_parse_spotify_url_user_playlist() {
    assert_eq!(
        parsed("https://open.spotify.com/user/spotify_user-1/playlist/pl42"),
        Some((UrlKind::Playlist, "pl42".to_string()))
    );
    assert_eq!(
        parsed("https://open.spotify.com/intl-fr/user/someone/playlist/pl43"),
        Some((UrlKind::Playlist, "pl43".to_string()))
    );
}

#[test]
fn test_parse_spotify_url_ignores_share_suffix() {
    assert_eq!(
        parsed("https://open.spotify.com/track/abc123?si=deadbeef"),
        Some((UrlKind::Track, "abc123".to_string()))
    );
    assert_eq!(
        parsed("https://open.spotify.com/album/a_b-c#fragment"),
        Some((UrlKind::Album, "a_b-c".to_string()))
    );
}

#[test]
fn test_parse_spotify_url_rejects_other_input() {
    assert_eq!(parsed("https://open.spotify.com/show/abc123"), None);
    assert_eq!(parsed("https://open.spotify.com/track/"), None);
    assert_eq!(parsed("https://open.spotify.com/track"), None);
    assert_eq!(parsed("open.spotify.com/track/abc123"), None);
    assert_eq!(parsed("https://example.com/track/abc123"), None);
    assert_eq!(parsed("spotify:track:abc123"), None);
    assert_eq!(parsed(""), None);
}

#[test]
fn test_strip_preview_prefix() {
    assert_eq!(strip_preview_prefix("spprev:1 x"), (true, "1 x"));
    assert_eq!(strip_preview_prefix("1 x"), (false, "1 x"));
    assert_eq!(strip_preview_prefix("x spprev:"), (false, "x spprev:"));
}

#[test]
fn test_split_tenant_reference() {
    assert_eq!(
        split_tenant_reference("42 https://open.spotify.com/track/abc"),
        Some((42, "https://open.spotify.com/track/abc".to_string()))
    );
    assert_eq!(
        split_tenant_reference("-1 spsearch:daft punk"),
        Some((-1, "spsearch:daft punk".to_string()))
    );
    assert_eq!(split_tenant_reference("https://open.spotify.com/track/abc"), None);
    assert_eq!(split_tenant_reference("abc spsearch:x"), None);
    assert_eq!(split_tenant_reference(""), None);
}

#[test]
fn test_split_tenant_query() {
    assert_eq!(split_tenant_query("7 daft punk"), (7, "daft punk".to_string()));
    assert_eq!(split_tenant_query("daftpunk"), (FALLBACK_TENANT, "daftpunk".to_string()));
    assert_eq!(
        split_tenant_query("daft punk"),
        (FALLBACK_TENANT, "daft punk".to_string())
    );
    assert_eq!(
        split_tenant_query("spsearch:daft punk"),
        (FALLBACK_TENANT, "spsearch:daft punk".to_string())
    );
    assert_eq!(split_tenant_query("-1 a b"), (FALLBACK_TENANT, "a b".to_string()));
}

#[test]
fn test_basic_auth_header() {
    assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
    assert_eq!(basic_auth_header("", ""), "Basic Og==");
}

#[test]
fn test_format_length() {
    assert_eq!(format_length(0), "0:00");
    assert_eq!(format_length(30_000), "0:30");
    assert_eq!(format_length(215_999), "3:35");
    assert_eq!(format_length(3_600_000), "60:00");
}

#[test]
fn test_search_type_from_str() {
    assert_eq!("album".parse::<SearchType>(), Ok(SearchType::Album));
    assert_eq!(" Track ".parse::<SearchType>(), Ok(SearchType::Track));
    assert_eq!("TEXT".parse::<SearchType>(), Ok(SearchType::Text));

    let err = "podcast".parse::<SearchType>().unwrap_err();
    assert!(err.contains("invalid value 'podcast'"));
}

#[test]
fn test_parse_search_types() {
    let types = parse_search_types("track,album").unwrap();
    assert!(types.contains(SearchType::Track));
    assert!(types.contains(SearchType::Album));
    assert!(!types.contains(SearchType::Artist));
    // Ordered and deduplicated regardless of input order
    assert_eq!(types.to_string(), "album,track");
    assert_eq!(parse_search_types("track,track").unwrap().to_string(), "track");

    assert!(parse_search_types("").is_err());
    assert!(parse_search_types("track,,album").is_err());
    assert!(parse_search_types("track,video").is_err());
}

#[test]
fn test_supported_search_types() {
    let supported = SearchTypes::supported();
    assert_eq!(supported.to_string(), "album,artist,playlist,track");
    assert!(!supported.contains(SearchType::Text));
    assert!(SearchTypes::default().is_empty());
}
