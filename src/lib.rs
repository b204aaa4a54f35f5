//! Spotify catalog source library
//!
//! This library turns Spotify catalog identifiers (track, album, playlist and
//! artist links, `spsearch:` queries and `sprec:` recommendation queries) into
//! playable track metadata by calling the Spotify Web API. Credentials are kept
//! per tenant, with a fallback tenant used whenever a tenant has none of its own.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints exposed by the local server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every operation
//! - `management` - Tenant credentials and bearer token caching
//! - `server` - Local HTTP server wiring
//! - `source` - Identifier dispatch and the host-facing entry points
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Identifier parsing and other helpers
//!
//! # Example
//!
//! ```
//! use spotsrc::{config::SpotifyConfig, source::SpotifySource, types::LoadResult};
//!
//! #[tokio::main]
//! async fn main() -> spotsrc::Res<()> {
//!     let source = SpotifySource::new(SpotifyConfig::default());
//!     source.register_credentials("id", "secret", None, spotsrc::FALLBACK_TENANT);
//!     match source.resolve("spsearch:daft punk", spotsrc::FALLBACK_TENANT, false).await? {
//!         LoadResult::Collection(c) => println!("{} tracks", c.tracks.len()),
//!         _ => println!("nothing found"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod source;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::SpotifyError;

/// Tenant key identifying a guild or any other isolated consumer.
pub type TenantId = i64;

/// Tenant whose credentials are used when a tenant has none registered.
pub const FALLBACK_TENANT: TenantId = -1;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the binary layer where errors of different origins meet. Library
/// operations return [`error::Result`] with a concrete [`SpotifyError`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Resolving {}", identifier);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro terminates the process with exit code 1. Library code never
/// calls it; it is reserved for unrecoverable errors in the binary.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable anomalies, such as a pagination ceiling cutting a
/// collection short.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
