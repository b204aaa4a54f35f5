use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    error::{Result, SpotifyError},
    types::TokenResponse,
    utils,
};

/// Token obtained from the client-credentials grant.
#[derive(Debug, Clone)]
pub struct Grant {
    pub access_token: String,
    /// Lifetime in seconds; `0` when Spotify omitted the field.
    pub expires_in: u64,
}

/// Exchanges app credentials for a bearer token.
///
/// Performs the OAuth 2.0 client-credentials grant against `token_url`:
/// a `POST` with `Authorization: Basic base64(client_id:client_secret)` and
/// the form body `grant_type=client_credentials`.
///
/// # Errors
///
/// Every failure maps to [`SpotifyError::UpstreamAuth`]:
/// - network or transport errors
/// - non-2xx responses (invalid credentials, revoked app, ...)
/// - a body that is not JSON or lacks `access_token`
///
/// No retry is attempted.
pub async fn request_client_credentials(
    client: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Grant> {
    let response = client
        .post(token_url)
        .header(AUTHORIZATION, utils::basic_auth_header(client_id, client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| SpotifyError::UpstreamAuth(e.to_string()))?;

    let response = response
        .error_for_status()
        .map_err(|e| SpotifyError::UpstreamAuth(e.to_string()))?;

    let json = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| SpotifyError::UpstreamAuth(format!("unreadable token response: {}", e)))?;

    let access_token = json
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            SpotifyError::UpstreamAuth("token response without access_token".to_string())
        })?;

    Ok(Grant {
        access_token,
        expires_in: json.expires_in.unwrap_or(0),
    })
}
