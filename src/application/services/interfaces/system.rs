use crate::application::models::envelope::ResponseEnvelope;
use crate::application::models::system::{HealthStatus, ServiceStats};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the system service
#[async_trait]
pub trait SystemService: Send + Sync {
    /// Probes the health of the service
    async fn health_check(&self) -> Result<ResponseEnvelope<HealthStatus>, AppError>;

    /// Gets aggregate service statistics
    async fn get_stats(&self) -> Result<ResponseEnvelope<ServiceStats>, AppError>;
}
