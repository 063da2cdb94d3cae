//! HTTP client module.
//!
//! [`FetchClient`] executes requests described by an
//! [`EndpointDescriptor`](crate::EndpointDescriptor) or by a raw path
//! template. It is configured once through [`FetchClientBuilder`] and can be
//! adjusted later with `&mut self` setters; requests only need `&self`.

mod builder;
mod executor;
mod request;

pub use builder::{ConfigOptions, FetchClientBuilder, DEFAULT_TIMEOUT, USER_AGENT};
pub use executor::FetchClient;
pub use request::FetchRequest;
