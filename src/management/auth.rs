use std::sync::Arc;

use reqwest::Client;

use crate::{
    TenantId,
    error::{Result, SpotifyError},
    management::credentials::{CredentialStore, TenantCredentials},
    spotify,
};

/// Hands out bearer tokens per tenant, refreshing them lazily.
pub struct TokenManager {
    store: Arc<CredentialStore>,
    client: Client,
    token_url: String,
}

impl TokenManager {
    pub fn new(store: Arc<CredentialStore>, client: Client, token_url: String) -> Self {
        TokenManager {
            store,
            client,
            token_url,
        }
    }

    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    /// Returns a valid bearer token for `tenant`.
    ///
    /// Uses the tenant's own credentials, else the fallback tenant's. A cached
    /// token is returned as long as it has not expired; otherwise exactly one
    /// refresh is attempted while holding the entry's lock.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Configuration`] when neither entry exists
    /// - [`SpotifyError::UpstreamAuth`] when the refresh fails
    pub async fn get_valid_token(&self, tenant: TenantId) -> Result<String> {
        let entry = self
            .store
            .resolve(tenant)
            .ok_or_else(|| SpotifyError::no_credentials(tenant))?;
        let mut credentials = entry.lock().await;

        if let Some(token) = credentials.valid_token() {
            return Ok(token.to_string());
        }

        self.refresh(&mut credentials).await
    }

    /// Forces a client-credentials exchange for `tenant`, caching the result.
    ///
    /// On failure the previously cached token and expiry stay untouched.
    pub async fn refresh_token(&self, tenant: TenantId) -> Result<String> {
        let entry = self
            .store
            .resolve(tenant)
            .ok_or_else(|| SpotifyError::no_credentials(tenant))?;
        let mut credentials = entry.lock().await;
        self.refresh(&mut credentials).await
    }

    async fn refresh(&self, credentials: &mut TenantCredentials) -> Result<String> {
        let grant = spotify::auth::request_client_credentials(
            &self.client,
            &self.token_url,
            credentials.client_id(),
            credentials.client_secret(),
        )
        .await?;

        credentials.store_token(grant.access_token.clone(), grant.expires_in);
        Ok(grant.access_token)
    }
}
