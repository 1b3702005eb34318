/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing the system service for health checks and statistics
pub mod system_service;
/// Module containing the user service for account management
pub mod user_service;

pub use interfaces::system::*;
pub use interfaces::user::*;
pub use system_service::*;
pub use user_service::*;
