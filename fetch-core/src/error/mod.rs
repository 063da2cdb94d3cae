//! Layered error types for the fetch core.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all fetch operations
//! - [`ClientError`] - Transport failures and HTTP status errors
//! - [`ValidationError`] - Request encoding and response decoding errors
//! - [`AuthError`] - Credential and authorization errors
//! - [`ConfigError`] - Server, descriptor and client configuration errors

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use validation_error::ValidationError;
