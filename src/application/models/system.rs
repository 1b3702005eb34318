use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Health probe payload from `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    /// Overall state, `healthy` or `degraded`
    pub status: String,
    /// Server-side timestamp of the probe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Database check result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Backend-specific fields the server adds, e.g. the tunnel daemon state
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl HealthStatus {
    /// True when the server reports itself fully healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Aggregate account counters from `GET /stats`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceStats {
    /// Total number of accounts
    #[serde(default)]
    pub total_users: i64,
    /// Accounts currently enabled
    #[serde(default)]
    pub active_users: i64,
    /// Accounts past their expiry time
    #[serde(default)]
    pub expired_users: i64,
    /// Accounts that consumed their traffic allowance
    #[serde(default)]
    pub over_limit_users: i64,
    /// Backend-specific fields, e.g. whether the tunnel daemon is running
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
