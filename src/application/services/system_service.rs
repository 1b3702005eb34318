use crate::application::models::envelope::ResponseEnvelope;
use crate::application::models::system::{HealthStatus, ServiceStats};
use crate::application::services::SystemService;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::VpnHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

/// Implementation of the system service
///
/// Health and statistics live at the server root, outside the `/api` prefix.
pub struct SystemServiceImpl<T: VpnHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: VpnHttpClient> SystemServiceImpl<T> {
    /// Creates a new instance of the system service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: VpnHttpClient + 'static> SystemService for SystemServiceImpl<T> {
    async fn health_check(&self) -> Result<ResponseEnvelope<HealthStatus>, AppError> {
        self.client
            .request::<(), ResponseEnvelope<HealthStatus>>(Method::GET, "health", None)
            .await
    }

    async fn get_stats(&self) -> Result<ResponseEnvelope<ServiceStats>, AppError> {
        self.client
            .request::<(), ResponseEnvelope<ServiceStats>>(Method::GET, "stats", None)
            .await
    }
}
