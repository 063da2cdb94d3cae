//! Authentication and authorization errors.

use thiserror::Error;

/// Errors related to API authentication.
///
/// These errors occur while building credentials or when a caller converts
/// a 401/403 response into an error.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No API key could be found for the specified provider.
    #[error("Missing API key for {provider}")]
    MissingApiKey {
        /// The provider name that requires the API key.
        provider: String,
    },

    /// `auth()` accepts one value (token or key) or two (username, password).
    #[error("Expected 1 or 2 credential values, got {count}")]
    InvalidCredentialCount {
        /// Number of values supplied.
        count: usize,
    },

    /// A credential value cannot be sent as an HTTP header.
    #[error("Credential is not a valid header value")]
    InvalidCredential,

    /// The API-key header name declared by the security scheme is invalid.
    #[error("Invalid API key header name: {name}")]
    InvalidHeaderName {
        /// The rejected header name.
        name: String,
    },

    /// Server rejected the credentials (401).
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error body from the server.
        message: String,
    },

    /// Server refused the operation for these credentials (403).
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Error body from the server.
        message: String,
    },
}
