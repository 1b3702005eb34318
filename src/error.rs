use std::fmt;

/// Main error type for the library
///
/// Transport-level failures and undecodable bodies surface here. Server-side
/// failures do not: the service answers those with its regular JSON envelope
/// (`success: false`), which is decoded and returned like any other response.
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure (DNS, connect, timeout, request build)
    Network(reqwest::Error),
    /// Response body could not be decoded as JSON
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
    /// Caller-supplied input rejected before any request was made
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json decode error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::InvalidInput(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}
