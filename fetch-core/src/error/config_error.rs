//! Client, server and descriptor configuration errors.

use thiserror::Error;

use crate::endpoint_id::EndpointIdError;

/// Errors in client or endpoint configuration.
///
/// These are raised before any network I/O and usually point at a
/// programmer error: a bad server URL, a missing path parameter, or an
/// operation the active profile does not include.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A server URL template still contains a `{placeholder}` after
    /// substitution.
    #[error("Unresolved server variable: {{{name}}}")]
    UnresolvedServerVariable {
        /// The placeholder name.
        name: String,
    },

    /// A path template placeholder had no matching parameter.
    #[error("Missing path parameter `{name}` for {path}")]
    MissingPathParameter {
        /// The placeholder name.
        name: String,
        /// The path template being filled.
        path: String,
    },

    /// Path template contains invalid parameter syntax.
    #[error("Invalid path template: {message}")]
    InvalidPathTemplate {
        /// Description of the path template error.
        message: String,
    },

    /// Endpoint ID validation failed.
    #[error("Invalid endpoint ID: {0}")]
    InvalidEndpointId(#[from] EndpointIdError),

    /// A descriptor declares a JSON body on a method that carries none.
    #[error("Endpoint {id} declares a JSON body but {method} requests carry none")]
    BodyNotAllowed {
        /// The operation id.
        id: String,
        /// The descriptor's method.
        method: String,
    },

    /// Duplicate endpoint ID detected.
    #[error("Duplicate endpoint ID: {id}")]
    DuplicateEndpoint {
        /// The duplicate endpoint ID.
        id: String,
    },

    /// The operation is not part of the client's active profile.
    #[error("Endpoint {id} is not enabled in the {profile} profile")]
    EndpointNotEnabled {
        /// The rejected operation id.
        id: String,
        /// The active profile name.
        profile: String,
    },

    /// A default header name or value is invalid.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the problem.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid path template error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPathTemplate {
            message: message.into(),
        }
    }
}
