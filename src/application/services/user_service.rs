use crate::application::models::envelope::ResponseEnvelope;
use crate::application::models::user::{ClientConfig, CreateUserRequest, UpdateUserRequest, User};
use crate::application::services::UserService;
use crate::config::Config;
use crate::constants::{DEFAULT_EXPIRY_DAYS, UNLIMITED_TRAFFIC};
use crate::error::AppError;
use crate::transport::http_client::VpnHttpClient;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the user service
pub struct UserServiceImpl<T: VpnHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: VpnHttpClient> UserServiceImpl<T> {
    /// Creates a new instance of the user service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    ///
    /// # Returns
    /// * Reference to the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: VpnHttpClient + 'static> UserService for UserServiceImpl<T> {
    async fn create_user(
        &self,
        username: &str,
        password: &str,
        traffic_limit: Option<i64>,
        days: Option<i64>,
    ) -> Result<ResponseEnvelope<User>, AppError> {
        if username.is_empty() {
            return Err(AppError::InvalidInput(
                "username must not be empty".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(AppError::InvalidInput(
                "password must not be empty".to_string(),
            ));
        }

        let traffic_limit = traffic_limit.unwrap_or(UNLIMITED_TRAFFIC);
        if traffic_limit < 0 {
            return Err(AppError::InvalidInput(
                "traffic_limit must not be negative".to_string(),
            ));
        }

        let days = days.unwrap_or(DEFAULT_EXPIRY_DAYS);
        if days <= 0 {
            return Err(AppError::InvalidInput("days must be positive".to_string()));
        }

        let request = CreateUserRequest::with_days(username, password, traffic_limit, days);
        info!("Creating user {}", username);

        self.client
            .request(Method::POST, "api/users", Some(&request))
            .await
    }

    async fn list_users(&self, active_only: bool) -> Result<ResponseEnvelope<Vec<User>>, AppError> {
        let path = if active_only {
            "api/users?active=true"
        } else {
            "api/users"
        };
        debug!("Listing users (active_only: {})", active_only);

        self.client
            .request::<(), ResponseEnvelope<Vec<User>>>(Method::GET, path, None)
            .await
    }

    async fn get_user(&self, user_id: u64) -> Result<ResponseEnvelope<User>, AppError> {
        let path = format!("api/users/{user_id}");

        self.client
            .request::<(), ResponseEnvelope<User>>(Method::GET, &path, None)
            .await
    }

    async fn update_user(
        &self,
        user_id: u64,
        update: &UpdateUserRequest,
    ) -> Result<ResponseEnvelope<User>, AppError> {
        let path = format!("api/users/{user_id}");
        debug!("Updating user {}", user_id);

        self.client
            .request(Method::PATCH, &path, Some(update))
            .await
    }

    async fn delete_user(&self, user_id: u64) -> Result<bool, AppError> {
        let path = format!("api/users/{user_id}");
        info!("Deleting user {}", user_id);

        let status = self
            .client
            .request_status::<()>(Method::DELETE, &path, None)
            .await?;

        Ok(status == StatusCode::NO_CONTENT)
    }

    async fn get_user_config(
        &self,
        user_id: u64,
    ) -> Result<ResponseEnvelope<ClientConfig>, AppError> {
        let path = format!("api/users/{user_id}/config");

        self.client
            .request::<(), ResponseEnvelope<ClientConfig>>(Method::GET, &path, None)
            .await
    }

    async fn reset_traffic(&self, user_id: u64) -> Result<ResponseEnvelope<Value>, AppError> {
        let path = format!("api/users/{user_id}/reset-traffic");
        info!("Resetting traffic for user {}", user_id);

        self.client
            .request::<(), ResponseEnvelope<Value>>(Method::POST, &path, None)
            .await
    }
}
