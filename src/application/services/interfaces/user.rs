use crate::application::models::envelope::ResponseEnvelope;
use crate::application::models::user::{ClientConfig, UpdateUserRequest, User};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the user service
///
/// Every method is an independent, stateless request/response exchange
/// against one `/api/users` endpoint.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user account
    ///
    /// The expiry is computed client-side as the current UTC time plus
    /// `days`, formatted as ISO-8601 with a trailing `Z`.
    ///
    /// # Arguments
    /// * `username` - Account name, must not be empty
    /// * `password` - Account password, must not be empty
    /// * `traffic_limit` - Traffic allowance in bytes (default 0 = unlimited)
    /// * `days` - Account lifetime in days, must be positive (default 30)
    ///
    /// # Returns
    /// * Envelope with the created account, including its server-assigned id
    async fn create_user(
        &self,
        username: &str,
        password: &str,
        traffic_limit: Option<i64>,
        days: Option<i64>,
    ) -> Result<ResponseEnvelope<User>, AppError>;

    /// Lists user accounts
    ///
    /// # Arguments
    /// * `active_only` - When true, the request carries `active=true` and the
    ///   server returns only enabled accounts
    async fn list_users(&self, active_only: bool) -> Result<ResponseEnvelope<Vec<User>>, AppError>;

    /// Gets a single user account by id
    async fn get_user(&self, user_id: u64) -> Result<ResponseEnvelope<User>, AppError>;

    /// Applies a partial update to a user account
    ///
    /// Fields left as `None` in `update` keep their server-side values.
    async fn update_user(
        &self,
        user_id: u64,
        update: &UpdateUserRequest,
    ) -> Result<ResponseEnvelope<User>, AppError>;

    /// Deletes a user account
    ///
    /// # Returns
    /// * `true` iff the server answered with 204 No Content
    async fn delete_user(&self, user_id: u64) -> Result<bool, AppError>;

    /// Gets the connection bundle (URI, client config, QR code) for a user
    async fn get_user_config(
        &self,
        user_id: u64,
    ) -> Result<ResponseEnvelope<ClientConfig>, AppError>;

    /// Resets the user's traffic counter to zero
    async fn reset_traffic(&self, user_id: u64) -> Result<ResponseEnvelope<Value>, AppError>;
}
