use serde::{Deserialize, Serialize};

/// Top-level JSON wrapper the VPN service puts around every response body
///
/// Success responses carry `success = true` and the payload in `data`;
/// error responses carry `success = false` together with `error` and the
/// HTTP status echoed in `code`. Both shapes decode into this one type, so
/// a non-2xx body is handed back to the caller instead of being swallowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseEnvelope<T> {
    /// Whether the server processed the request successfully
    pub success: bool,
    /// Payload of a successful response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error description on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// HTTP status code echoed in error responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

impl<T> ResponseEnvelope<T> {
    /// Returns true when the server reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Consumes the envelope and returns the payload, if any
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Returns a reference to the payload, if any
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
