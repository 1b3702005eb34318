use chrono::{DateTime, Duration, SecondsFormat, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A VPN user account as returned by the management API
///
/// The password is write-only on the server side and never appears in
/// responses.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Server-assigned numeric identifier
    pub id: u64,
    /// Unique account name
    pub username: String,
    /// UUID the tunnel protocol identifies this account by
    pub uuid: String,
    /// Shared secret for protocols that require one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Whether the account is enabled
    pub is_active: bool,
    /// Expiry timestamp; the server reports the zero timestamp when no expiry is set
    pub expires_at: DateTime<Utc>,
    /// Traffic allowance in bytes, 0 = unlimited
    pub traffic_limit: i64,
    /// Bytes consumed since the last traffic reset
    pub traffic_used: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the account's expiry time has passed
    ///
    /// Accounts without an expiry (the server reports the zero timestamp)
    /// never expire.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.timestamp() > 0 && Utc::now() > self.expires_at
    }

    /// Whether the account has consumed its traffic allowance
    #[must_use]
    pub fn is_over_limit(&self) -> bool {
        self.traffic_limit > 0 && self.traffic_used >= self.traffic_limit
    }

    /// Whether the account is currently allowed to establish a tunnel
    #[must_use]
    pub fn can_connect(&self) -> bool {
        self.is_active && !self.is_expired() && !self.is_over_limit()
    }

    /// Remaining traffic in bytes, or `None` when the account is unlimited
    #[must_use]
    pub fn remaining_traffic(&self) -> Option<i64> {
        if self.traffic_limit == 0 {
            return None;
        }
        Some((self.traffic_limit - self.traffic_used).max(0))
    }
}

/// Body of `POST /api/users`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Account name, must be unique on the server
    pub username: String,
    /// Plaintext password; the server stores only a hash
    pub password: String,
    /// Traffic allowance in bytes, 0 = unlimited
    pub traffic_limit: i64,
    /// Account expiry as an ISO-8601 UTC string with a trailing `Z`
    pub expires_at: String,
}

impl CreateUserRequest {
    /// Builds a request whose expiry is `days` from now
    pub fn with_days(username: &str, password: &str, traffic_limit: i64, days: i64) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            traffic_limit,
            expires_at: expiry_from_days(days),
        }
    }
}

/// Formats `now + days` as the ISO-8601 UTC string the server expects
#[must_use]
pub fn expiry_from_days(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Partial update body for `PATCH /api/users/{id}`
///
/// Only fields set to `Some` are serialized, so fields left as `None` keep
/// their server-side values.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUserRequest {
    /// New account name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New plaintext password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New traffic allowance in bytes, 0 = unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_limit: Option<i64>,
    /// New expiry timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Enables or disables the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    /// True when no field is set; sending such an update is a no-op
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.traffic_limit.is_none()
            && self.expires_at.is_none()
            && self.is_active.is_none()
    }
}

/// Per-user connection bundle returned by `GET /api/users/{id}/config`
#[derive(DebugPretty, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Account name
    pub username: String,
    /// UUID the tunnel protocol identifies this account by
    pub uuid: String,
    /// Public address of the VPN server
    pub server_ip: String,
    /// Port the VPN server listens on
    pub server_port: u16,
    /// Full client configuration as a JSON document
    #[serde(rename = "json")]
    pub config_json: String,
    /// Connection URI importable by client applications
    pub uri: String,
    /// Base64 PNG QR code of the URI, when the server generates one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    /// Account expiry as reported by the server
    pub expires_at: String,
    /// Traffic allowance in bytes, 0 = unlimited
    pub traffic_limit: i64,
    /// Bytes consumed since the last traffic reset
    pub traffic_used: i64,
    /// Whether the account is enabled
    pub is_active: bool,
}
