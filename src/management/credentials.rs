use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::{FALLBACK_TENANT, TenantId};

/// Spotify app credentials of one tenant plus its cached bearer token.
#[derive(Debug, Clone)]
pub struct TenantCredentials {
    client_id: String,
    client_secret: String,
    country_code: String,
    token: Option<String>,
    token_expiry: Option<DateTime<Utc>>,
}

impl TenantCredentials {
    /// Creates credentials without a cached token.
    ///
    /// # Arguments
    ///
    /// * `client_id` - Spotify app client id
    /// * `client_secret` - Spotify app client secret
    /// * `country_code` - Market used for artist top tracks, e.g. `"US"`
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            country_code: country_code.into(),
            token: None,
            token_expiry: None,
        }
    }

    /// Spotify app client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Market of the tenant.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Last token issued for these credentials, expired or not.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Instant after which the cached token is no longer handed out.
    pub fn token_expiry(&self) -> Option<DateTime<Utc>> {
        self.token_expiry
    }

    /// Returns the cached token while its expiry lies strictly in the future.
    pub fn valid_token(&self) -> Option<&str> {
        match (&self.token, self.token_expiry) {
            (Some(token), Some(expiry)) if expiry > Utc::now() => Some(token),
            _ => None,
        }
    }

    /// Caches `token` for `expires_in` seconds from now.
    ///
    /// # Arguments
    ///
    /// * `token` - Bearer token returned by the token endpoint
    /// * `expires_in` - Lifetime in seconds. `0` stores an already expired
    ///   token, so the next lookup refreshes again
    ///
    /// Lifetimes too large for `chrono` saturate at the maximum date.
    pub fn store_token(&mut self, token: String, expires_in: u64) {
        let expiry = i64::try_from(expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.token = Some(token);
        self.token_expiry = Some(expiry);
    }
}

/// Credentials entry shared between the store and in-flight refreshes.
pub type SharedCredentials = Arc<Mutex<TenantCredentials>>;

/// Process-scoped registry of tenant credentials.
///
/// Each entry sits behind its own async mutex so token refreshes for one
/// tenant are serialized while other tenants proceed. The map lock itself is
/// only held for lookups and registration, never across an await.
#[derive(Debug, Default)]
pub struct CredentialStore {
    entries: RwLock<HashMap<TenantId, SharedCredentials>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces the entry of `tenant`. Any cached token is dropped.
    pub fn put(&self, tenant: TenantId, credentials: TenantCredentials) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(tenant, Arc::new(Mutex::new(credentials)));
    }

    /// Removes the entry of `tenant`, reporting whether one existed.
    pub fn remove(&self, tenant: TenantId) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(&tenant).is_some()
    }

    /// Returns the entry registered for exactly `tenant`.
    pub fn get(&self, tenant: TenantId) -> Option<SharedCredentials> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&tenant).cloned()
    }

    /// Returns the entry of `tenant`, or the fallback tenant's entry.
    ///
    /// # Returns
    ///
    /// - `Some(entry)` registered for `tenant` when present
    /// - `Some(entry)` of [`FALLBACK_TENANT`] otherwise, if registered
    /// - `None` when neither exists
    pub fn resolve(&self, tenant: TenantId) -> Option<SharedCredentials> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&tenant)
            .or_else(|| entries.get(&FALLBACK_TENANT))
            .cloned()
    }

    /// Whether `tenant` has its own entry (the fallback is not consulted).
    pub fn contains(&self, tenant: TenantId) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(&tenant)
    }

    /// Number of registered tenants, the fallback tenant included.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Country code of the resolved entry, if any.
    pub async fn country_code(&self, tenant: TenantId) -> Option<String> {
        let entry = self.resolve(tenant)?;
        let credentials = entry.lock().await;
        Some(credentials.country_code().to_string())
    }
}
