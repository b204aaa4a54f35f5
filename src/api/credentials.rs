use std::sync::Arc;

use axum::{
    Extension,
    extract::{Json, Path},
    http::StatusCode,
};

use crate::{TenantId, api::ApiError, source::SpotifySource, types::CredentialsRequest};

/// `PUT /credentials/{tenant}`
pub async fn register(
    Path(tenant): Path<TenantId>,
    Extension(source): Extension<Arc<SpotifySource>>,
    Json(body): Json<CredentialsRequest>,
) -> Result<StatusCode, ApiError> {
    if body.client_id.trim().is_empty() || body.client_secret.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "client_id and client_secret are required".to_string(),
        ));
    }

    source.register_credentials(
        &body.client_id,
        &body.client_secret,
        body.country_code.as_deref(),
        tenant,
    );
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /credentials/{tenant}`
pub async fn unregister(
    Path(tenant): Path<TenantId>,
    Extension(source): Extension<Arc<SpotifySource>>,
) -> StatusCode {
    if source.unregister_credentials(tenant) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
