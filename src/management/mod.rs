mod auth;
mod credentials;

pub use auth::TokenManager;
pub use credentials::CredentialStore;
pub use credentials::SharedCredentials;
pub use credentials::TenantCredentials;
