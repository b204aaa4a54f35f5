//! # API Module
//!
//! HTTP endpoints exposing a [`crate::source::SpotifySource`] to hosts that
//! run out of process.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status, version and registered tenant count
//! - [`load_items`] - `GET /loaditems?identifier=&tenant=&preview=`
//! - [`search`] - `GET /search?query=&types=&tenant=`
//! - [`register`] - `PUT /credentials/{tenant}` with a JSON body
//!   `{ "client_id", "client_secret", "country_code"? }`
//! - [`unregister`] - `DELETE /credentials/{tenant}`
//!
//! ## Errors
//!
//! Failures are returned as `{ "error": "<message>" }`:
//! - `400` invalid search types or credentials body
//! - `412` no credentials registered for the tenant or the fallback tenant
//! - `502` Spotify rejected the credentials or a catalog request failed
//!
//! A resolution without playable tracks is not an error; it answers `200`
//! with `load_type` `not_found`.

mod credentials;
mod health;
mod load;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::error::SpotifyError;

pub use credentials::register;
pub use credentials::unregister;
pub use health::health;
pub use load::load_items;
pub use load::search;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Spotify(SpotifyError),
}

impl From<SpotifyError> for ApiError {
    fn from(err: SpotifyError) -> Self {
        ApiError::Spotify(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Spotify(err) => {
                let status = match err {
                    SpotifyError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                    SpotifyError::Configuration(_) => StatusCode::PRECONDITION_FAILED,
                    SpotifyError::UpstreamAuth(_) | SpotifyError::UpstreamRequest(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                (status, err.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
