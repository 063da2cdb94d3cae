//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the HTTP client layer.
///
/// `Request`, `Timeout` and `Connection` mean no response was received.
/// `HttpStatus` only appears when a caller converts a non-success
/// [`FetchResponse`](crate::FetchResponse) with `into_result()`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to a network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Error body returned by the server.
        message: String,
    },

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to establish a connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl ClientError {
    /// Classifies a transport error from reqwest.
    ///
    /// Timeouts and connect failures get their own variants so callers can
    /// tell them apart without digging into the reqwest error.
    pub fn from_transport(error: reqwest::Error, timeout_ms: u64) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                duration_ms: timeout_ms,
            }
        } else if error.is_connect() {
            Self::Connection(error.to_string())
        } else {
            Self::Request(error)
        }
    }

    /// Returns the HTTP status code if this is an HTTP status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
