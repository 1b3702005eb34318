/// Simplified client facade wiring transport and services together
pub mod client;
/// Typed request and response models
pub mod models;
/// Service interfaces and implementations
pub mod services;
