#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use axum::{
    Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Json, Response},
    routing::post,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
use spotsrc::{config::SpotifyConfig, source::SpotifySource};

/// Mock of the Spotify token endpoint.
///
/// Issues `<client_id>-<n>` tokens, where `n` counts successful exchanges.
#[derive(Clone, Default)]
pub struct TokenEndpoint {
    pub calls: Arc<AtomicUsize>,
    pub fail: Arc<AtomicBool>,
    pub expires_in: Option<u64>,
}

impl TokenEndpoint {
    pub fn new(expires_in: Option<u64>) -> Self {
        Self {
            expires_in,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn router(&self) -> Router {
        let endpoint = self.clone();
        Router::new().route(
            "/api/token",
            post(move |headers: HeaderMap, body: String| {
                let endpoint = endpoint.clone();
                async move { endpoint.handle(&headers, &body) }
            }),
        )
    }

    fn handle(&self, headers: &HeaderMap, body: &str) -> Response {
        if self.fail.load(Ordering::SeqCst) {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "invalid_client" })),
            )
                .into_response();
        }

        let Some(client_id) = basic_client_id(headers) else {
            return StatusCode::UNAUTHORIZED.into_response();
        };
        if body != "grant_type=client_credentials" {
            return StatusCode::BAD_REQUEST.into_response();
        }

        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let mut payload = json!({
            "access_token": format!("{}-{}", client_id, n),
            "token_type": "Bearer",
        });
        if let Some(expires_in) = self.expires_in {
            payload["expires_in"] = json!(expires_in);
        }
        Json(payload).into_response()
    }
}

fn basic_client_id(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    decoded.split(':').next().map(str::to_string)
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    format!("http://{}", addr)
}

/// A source pointed at a mock server spawned at `base`.
pub fn source_for(base: &str) -> SpotifySource {
    SpotifySource::new(SpotifyConfig {
        api_url: format!("{}/v1", base),
        token_url: format!("{}/api/token", base),
        ..SpotifyConfig::default()
    })
}

/// Full Spotify track object.
pub fn track_json(id: &str, name: &str, is_local: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "duration_ms": 215_000,
        "is_local": is_local,
        "preview_url": format!("https://p.scdn.co/mp3-preview/{}", id),
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", id) },
        "external_ids": { "isrc": format!("ISRC{}", id) },
        "artists": [
            {
                "id": "artist1",
                "name": "The Artist",
                "external_urls": { "spotify": "https://open.spotify.com/artist/artist1" }
            },
            { "id": "artist2", "name": "Someone Else" }
        ],
        "album": {
            "id": "album1",
            "name": "The Album",
            "external_urls": { "spotify": "https://open.spotify.com/album/album1" },
            "images": [
                { "url": "https://i.scdn.co/image/large", "width": 640, "height": 640 },
                { "url": "https://i.scdn.co/image/small", "width": 64, "height": 64 }
            ]
        }
    })
}
