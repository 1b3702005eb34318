//! HTTP transport for the VPN service management API
//!
//! The transport owns URL joining, standard headers, optional bearer-token
//! authentication and JSON decoding. Response bodies are decoded regardless
//! of the HTTP status code: the server wraps its errors in the same JSON
//! envelope as its successes, and interpretation is left to the caller.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Trait for the HTTP transport used by the service layer
#[async_trait]
pub trait VpnHttpClient: Send + Sync {
    /// Sends a request and decodes the JSON response body
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the configured base URL
    /// * `body` - Optional request body to serialize as JSON
    ///
    /// # Returns
    /// * `Ok(T)` - Decoded response body, for any status code
    /// * `Err(AppError)` - Transport failure or a body that is not valid JSON
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// Sends a request and returns only the response status code
    ///
    /// Used for endpoints that answer with an empty body, such as
    /// `DELETE /api/users/{id}` which signals success with 204.
    async fn request_status<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<StatusCode, AppError>
    where
        B: Serialize + Sync;
}

/// HTTP transport backed by a reusable `reqwest` client
///
/// One instance holds one connection pool; it is intended to be created once
/// and shared across sequential calls by a single logical client.
pub struct VpnHttpClientImpl {
    config: Arc<Config>,
    http_client: Client,
}

impl VpnHttpClientImpl {
    /// Creates a new transport from the given configuration
    pub fn new(config: Arc<Config>) -> Self {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Joins the configured base URL with an endpoint path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path
            )
        }
    }

    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .header("Accept", "application/json; charset=UTF-8");

        if let Some(token) = &self.config.api_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        debug!("Response status: {}", response.status());

        Ok(response)
    }
}

#[async_trait]
impl VpnHttpClient for VpnHttpClientImpl {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str(&text) {
            Ok(decoded) => Ok(decoded),
            Err(e) => {
                error!("Failed to decode response with status {}: {}", status, text);
                Err(AppError::Json(e))
            }
        }
    }

    async fn request_status<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<StatusCode, AppError>
    where
        B: Serialize + Sync,
    {
        let response = self.send(method, path, body).await?;
        Ok(response.status())
    }
}
