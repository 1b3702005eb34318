//! # VPN Service Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. By importing this prelude, you get
//! access to all the essential components needed for most interactions with
//! the VPN service management API.
//!
//! ## Usage
//!
//! ```rust
//! use vpn_service_client::prelude::*;
//!
//! // Now you have access to all the commonly used types and traits
//! let config = Config::with_base_url("http://localhost:8080");
//! let client = VpnServiceClient::new(config);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the VPN service API client
pub use crate::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT FACADE
// ============================================================================

/// Simplified client exposing one method per remote endpoint
pub use crate::application::client::VpnServiceClient;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// System service trait for health checks and statistics
pub use crate::application::services::SystemService;

/// User service trait for account management operations
pub use crate::application::services::UserService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// System service implementation
pub use crate::application::services::system_service::SystemServiceImpl;

/// User service implementation
pub use crate::application::services::user_service::UserServiceImpl;

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::http_client::VpnHttpClient;

/// HTTP client implementation
pub use crate::transport::http_client::VpnHttpClientImpl;

// ============================================================================
// MODELS
// ============================================================================

/// Response envelope shared by every endpoint
pub use crate::application::models::envelope::ResponseEnvelope;

/// User account models and request bodies
pub use crate::application::models::user::{
    ClientConfig, CreateUserRequest, UpdateUserRequest, User, expiry_from_days,
};

/// Health and statistics payloads
pub use crate::application::models::system::{HealthStatus, ServiceStats};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Environment variable helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for HTTP operations (if needed for custom implementations)
pub use reqwest::Method;
