//! Generic fetch core for typed REST API clients.
//!
//! A vendor SDK describes each operation as a `const`
//! [`EndpointDescriptor`] and forwards calls to a shared [`FetchClient`],
//! which fills in the path template, appends query parameters, attaches
//! credentials according to the declared [`SecurityScheme`], sends the
//! request and decodes the response.
//!
//! ## Response model
//!
//! Any response the server sends back, including 4xx and 5xx, resolves as
//! `Ok(FetchResponse)`: the status is always available and error bodies are
//! kept in [`ResponseData::Error`]. Use [`FetchResponse::into_result`] to
//! turn a non-2xx status into an [`ApiError`]. Transport failures resolve as
//! `Err` after a single attempt.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use fetch_core::{EndpointDescriptor, FetchClient, FetchRequest, RestMethod};
//!
//! const LIST_USERS: EndpointDescriptor =
//!     EndpointDescriptor::new("getUsers", RestMethod::Get, "/users");
//!
//! # async fn run() -> Result<(), fetch_core::ApiError> {
//! let client = FetchClient::new("https://api.example.com/v1")?;
//! let users: serde_json::Value = client
//!     .execute(&LIST_USERS, FetchRequest::new().param("_limit", 10))
//!     .await?
//!     .into_result()?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod endpoint_id;
pub mod error;
pub mod method;
pub mod params;
pub mod response;
pub mod server;

pub use auth::{Credentials, SecurityScheme};
pub use client::{ConfigOptions, FetchClient, FetchClientBuilder, FetchRequest};
pub use endpoint::{validate_table, BodyKind, EndpointDescriptor, ResponseKind};
pub use endpoint_id::EndpointId;
pub use error::{ApiError, AuthError, ClientError, ConfigError, ValidationError};
pub use method::RestMethod;
pub use params::Params;
pub use response::{FetchResponse, ResponseData};
pub use server::ServerDefinition;
