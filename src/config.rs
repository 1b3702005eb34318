use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the VPN service API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Bearer token for the management API, if the server requires one
    pub api_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the VPN service management API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// A `.env` file is loaded when present. Missing variables fall back to
    /// their defaults; the token stays unset unless `VPN_API_TOKEN` is given.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("VPN_API_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("VPN_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            api_token: get_env_or_none("VPN_API_TOKEN"),
        }
    }

    /// Creates a configuration pointing at the given base URL, keeping every
    /// other setting at its default and without touching the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            api_token: None,
        }
    }
}
