// Common utilities for service tests

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use vpn_service_client::config::Config;
use vpn_service_client::error::AppError;
use vpn_service_client::transport::http_client::VpnHttpClient;

/// A request as seen by the transport stub
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Transport stub that records every request and answers with a canned body
pub struct RecordingClient {
    requests: Mutex<Vec<RecordedRequest>>,
    response: Value,
    status: StatusCode,
}

impl RecordingClient {
    pub fn with_response(response: Value) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response,
            status: StatusCode::OK,
        })
    }

    pub fn with_status(status: StatusCode) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response: Value::Null,
            status,
        })
    }

    /// Drains and returns everything recorded so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }

    /// Expects exactly one recorded request and returns it
    pub fn single_request(&self) -> RecordedRequest {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }

    fn record<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.map(|b| serde_json::to_value(b).unwrap()),
        });
    }
}

#[async_trait]
impl VpnHttpClient for RecordingClient {
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
        self.record(method, path, body);
        serde_json::from_value(self.response.clone()).map_err(AppError::Json)
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
        self.record(method, path, body);
        Ok(self.status)
    }
}

/// Creates a test configuration without touching the environment
pub fn test_config() -> Arc<Config> {
    Arc::new(Config::with_base_url("http://localhost:8080"))
}
