//! Request encoding and response decoding errors.

use thiserror::Error;

/// Errors while encoding a request or decoding a success response.
///
/// Error bodies of non-2xx responses are never decoded into typed models,
/// so they cannot produce a `ValidationError`.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing of a success body failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Empty response body when a typed model was expected.
    #[error("Empty response body")]
    EmptyBody,

    /// The request body or parameters could not be serialized to JSON.
    #[error("Failed to encode request: {message}")]
    RequestEncoding {
        /// Description of the encoding failure.
        message: String,
    },

    /// The operation takes a JSON body but the request has none.
    #[error("{endpoint} requires a JSON request body")]
    MissingBody {
        /// The operation id or method and path.
        endpoint: String,
    },

    /// The request has a body but the operation takes none.
    #[error("{endpoint} does not accept a request body")]
    UnexpectedBody {
        /// The operation id or method and path.
        endpoint: String,
    },

    /// A parameter value cannot be used where it was placed.
    #[error("Invalid value for parameter `{name}`: {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ValidationError {
    pub(crate) fn encoding(error: impl std::fmt::Display) -> Self {
        Self::RequestEncoding {
            message: error.to_string(),
        }
    }
}
