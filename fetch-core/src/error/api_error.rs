//! Top-level API error type.

use super::{AuthError, ClientError, ConfigError, ValidationError};
use thiserror::Error;

/// Top-level error type for all fetch operations.
///
/// A non-2xx response is *not* an error at this level: it resolves as a
/// [`FetchResponse`](crate::FetchResponse) carrying the status and the vendor
/// error body. `ApiError` is reserved for failures where no usable response
/// exists, plus the conversions done by
/// [`FetchResponse::into_result`](crate::FetchResponse::into_result).
///
/// ## Examples
///
/// ```rust,ignore
/// use fetch_core::ApiError;
///
/// fn handle_error(err: ApiError) {
///     match err {
///         ApiError::Client(e) => eprintln!("Network error: {e}"),
///         ApiError::Validation(e) => eprintln!("Bad payload: {e}"),
///         ApiError::Auth(e) => eprintln!("Auth failed: {e}"),
///         ApiError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client errors (network, timeout, status).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Request encoding or response decoding errors.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Client, server or descriptor configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns `true` if the request never produced a response because of
    /// a transport failure.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Client(ClientError::Request(_))
                | Self::Client(ClientError::Timeout { .. })
                | Self::Client(ClientError::Connection(_))
        )
    }

    /// Returns the HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            Self::Auth(AuthError::AuthenticationFailed { .. }) => Some(401),
            Self::Auth(AuthError::Forbidden { .. }) => Some(403),
            _ => None,
        }
    }
}
