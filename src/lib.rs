//! # VPN Service API Client
//!
//! This crate provides a Rust client for the management REST API of a VPN
//! service: user accounts, per-user connection configurations, traffic
//! accounting and service health.
//!
//! The client is a stateless wrapper around a configured base URL and a
//! reusable HTTP connection pool. Every method maps to exactly one remote
//! endpoint; the server's JSON envelope is decoded and handed back to the
//! caller, including for non-2xx responses, so interpretation of server-side
//! failures stays with the caller.
//!
//! ## Quick start
//!
//! ```ignore
//! use vpn_service_client::application::client::VpnServiceClient;
//! use vpn_service_client::config::Config;
//!
//! let client = VpnServiceClient::new(Config::new());
//!
//! let health = client.health_check().await?;
//! let created = client.create_user("alice", "s3cret", Some(10 * 1024 * 1024 * 1024), Some(30)).await?;
//! if let Some(user) = created.into_data() {
//!     let config = client.get_user_config(user.id).await?;
//! }
//! ```
//!
//! ## Configuration
//!
//! Configuration is read from the environment (a `.env` file is honored):
//!
//! * `VPN_API_BASE_URL` - base URL of the service (default `http://localhost:8080`)
//! * `VPN_API_TIMEOUT` - request timeout in seconds (default 30)
//! * `VPN_API_TOKEN` - bearer token, only needed when the server enforces one

/// Application layer: client facade, typed models and services
pub mod application;
/// Environment-driven configuration
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Commonly used types and traits
pub mod prelude;
/// HTTP transport layer
pub mod transport;
/// Utility modules
pub mod utils;

/// Library version, taken from Cargo.toml at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
