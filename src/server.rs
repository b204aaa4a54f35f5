use axum::{
    Extension, Router,
    routing::{get, put},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, error, source::SpotifySource};

pub fn router(source: Arc<SpotifySource>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/loaditems", get(api::load_items))
        .route("/search", get(api::search))
        .route(
            "/credentials/{tenant}",
            put(api::register).delete(api::unregister),
        )
        .layer(Extension(source))
}

pub async fn start_api_server(source: Arc<SpotifySource>) {
    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, router(source)).await {
        error!("Server stopped: {}", e);
    }
}
