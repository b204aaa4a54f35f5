use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::source::SpotifySource;

pub async fn health(Extension(source): Extension<Arc<SpotifySource>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "source": source.source_name(),
        "tenants": source.credentials().len(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
