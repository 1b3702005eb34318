//! Simplified client for the VPN service management API
//!
//! This module provides a clean, easy-to-use client that wires the
//! configuration, the HTTP transport and the services together and exposes
//! one method per remote endpoint.
//!
//! # Example
//! ```ignore
//! use vpn_service_client::application::client::VpnServiceClient;
//! use vpn_service_client::config::Config;
//!
//! let client = VpnServiceClient::new(Config::new());
//!
//! let health = client.health_check().await?;
//! let users = client.list_users(true).await?;
//! ```

use crate::application::models::envelope::ResponseEnvelope;
use crate::application::models::system::{HealthStatus, ServiceStats};
use crate::application::models::user::{ClientConfig, UpdateUserRequest, User};
use crate::application::services::system_service::SystemServiceImpl;
use crate::application::services::user_service::UserServiceImpl;
use crate::application::services::{SystemService, UserService};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::VpnHttpClientImpl;
use serde_json::Value;
use std::sync::Arc;

/// Simplified client for the VPN service management API
///
/// Holds one HTTP connection pool that is reused across sequential calls.
/// The client keeps no other state; every method is an independent
/// request/response exchange. Sharing one instance across threads requires
/// external synchronization by the caller.
pub struct VpnServiceClient {
    config: Arc<Config>,
    users: UserServiceImpl<VpnHttpClientImpl>,
    system: SystemServiceImpl<VpnHttpClientImpl>,
}

impl VpnServiceClient {
    /// Creates a new client from the given configuration
    ///
    /// # Arguments
    /// * `config` - Configuration with the base URL and optional API token
    ///
    /// # Example
    /// ```ignore
    /// let client = VpnServiceClient::new(Config::new());
    /// ```
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let http_client = Arc::new(VpnHttpClientImpl::new(config.clone()));

        Self {
            users: UserServiceImpl::new(config.clone(), http_client.clone()),
            system: SystemServiceImpl::new(config.clone(), http_client),
            config,
        }
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Probes the health of the service
    pub async fn health_check(&self) -> Result<ResponseEnvelope<HealthStatus>, AppError> {
        self.system.health_check().await
    }

    /// Gets aggregate service statistics
    pub async fn get_stats(&self) -> Result<ResponseEnvelope<ServiceStats>, AppError> {
        self.system.get_stats().await
    }

    /// Creates a new user account
    ///
    /// # Arguments
    /// * `username` - Account name, must not be empty
    /// * `password` - Account password, must not be empty
    /// * `traffic_limit` - Traffic allowance in bytes (default 0 = unlimited)
    /// * `days` - Account lifetime in days, must be positive (default 30)
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        traffic_limit: Option<i64>,
        days: Option<i64>,
    ) -> Result<ResponseEnvelope<User>, AppError> {
        self.users
            .create_user(username, password, traffic_limit, days)
            .await
    }

    /// Lists user accounts, optionally only the enabled ones
    pub async fn list_users(
        &self,
        active_only: bool,
    ) -> Result<ResponseEnvelope<Vec<User>>, AppError> {
        self.users.list_users(active_only).await
    }

    /// Gets a single user account by id
    pub async fn get_user(&self, user_id: u64) -> Result<ResponseEnvelope<User>, AppError> {
        self.users.get_user(user_id).await
    }

    /// Applies a partial update to a user account
    pub async fn update_user(
        &self,
        user_id: u64,
        update: &UpdateUserRequest,
    ) -> Result<ResponseEnvelope<User>, AppError> {
        self.users.update_user(user_id, update).await
    }

    /// Deletes a user account, returning true iff the server answered 204
    pub async fn delete_user(&self, user_id: u64) -> Result<bool, AppError> {
        self.users.delete_user(user_id).await
    }

    /// Gets the connection bundle (URI, client config, QR code) for a user
    pub async fn get_user_config(
        &self,
        user_id: u64,
    ) -> Result<ResponseEnvelope<ClientConfig>, AppError> {
        self.users.get_user_config(user_id).await
    }

    /// Resets the user's traffic counter to zero
    pub async fn reset_traffic(&self, user_id: u64) -> Result<ResponseEnvelope<Value>, AppError> {
        self.users.reset_traffic(user_id).await
    }
}

impl Default for VpnServiceClient {
    fn default() -> Self {
        Self::new(Config::new())
    }
}
