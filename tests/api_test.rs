mod common;

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{Value, json};
use spotsrc::{config::SpotifyConfig, server, source::SpotifySource};

use common::spawn;

async fn serve(source: SpotifySource) -> (String, Arc<SpotifySource>) {
    let source = Arc::new(source);
    let base = spawn(server::router(Arc::clone(&source))).await;
    (base, source)
}

#[tokio::test]
async fn test_health_reports_registered_tenants() {
    let source = SpotifySource::new(SpotifyConfig::default());
    source.register_credentials("a", "b", None, -1);
    let (base, _) = serve(source).await;

    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["source"], "spotify");
    assert_eq!(body["tenants"], 1);
}

#[tokio::test]
async fn test_register_and_unregister_credentials() {
    let (base, source) = serve(SpotifySource::new(SpotifyConfig::default())).await;
    let client = reqwest::Client::new();
    let url = format!("{}/credentials/42", base);

    let response = client
        .put(&url)
        .json(&json!({ "client_id": "id", "client_secret": "secret", "country_code": "DE" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(source.credentials().contains(42));
    assert_eq!(source.country_code(42).await, "DE");

    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!source.credentials().contains(42));

    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_rejects_blank_credentials() {
    let (base, source) = serve(SpotifySource::new(SpotifyConfig::default())).await;

    let response = reqwest::Client::new()
        .put(format!("{}/credentials/1", base))
        .json(&json!({ "client_id": " ", "client_secret": "secret" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(source.credentials().is_empty());
}

#[tokio::test]
async fn test_load_without_credentials_is_precondition_failed() {
    let (base, _) = serve(SpotifySource::new(SpotifyConfig::default())).await;

    let response = reqwest::Client::new()
        .get(format!("{}/loaditems", base))
        .query(&[("identifier", "https://open.spotify.com/track/abc"), ("tenant", "3")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_load_unknown_identifier_is_not_found_result() {
    let (base, _) = serve(SpotifySource::new(SpotifyConfig::default())).await;

    let response = reqwest::Client::new()
        .get(format!("{}/loaditems", base))
        .query(&[("identifier", "no-tenant-prefix")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["load_type"], "not_found");
}

#[tokio::test]
async fn test_search_rejects_invalid_types() {
    let (base, _) = serve(SpotifySource::new(SpotifyConfig::default())).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/search", base))
        .query(&[("query", "x"), ("types", "track,video")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .get(format!("{}/search", base))
        .query(&[("query", "x"), ("types", "text"), ("tenant", "1")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
