use thiserror::Error;

/// Failures surfaced by credential handling and catalog resolution.
///
/// An identifier that yields nothing playable is not an error; it resolves to
/// [`crate::types::LoadResult::NotFound`].
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Spotify authentication failed: {0}")]
    UpstreamAuth(String),

    #[error("Spotify request failed: {0}")]
    UpstreamRequest(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SpotifyError {
    pub fn no_credentials(tenant: crate::TenantId) -> Self {
        SpotifyError::Configuration(format!(
            "no Spotify credentials registered for tenant {} and no fallback credentials",
            tenant
        ))
    }
}

pub type Result<T> = std::result::Result<T, SpotifyError>;
