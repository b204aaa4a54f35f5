use std::sync::Arc;

use crate::{info, server::start_api_server, source::SpotifySource};

pub async fn serve(source: SpotifySource) {
    info!("Serving {} on {}", source.source_name(), crate::config::server_addr());
    start_api_server(Arc::new(source)).await;
}
