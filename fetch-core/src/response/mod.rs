//! Response handling module.
//!
//! Every received response, whatever its status, resolves as a
//! [`FetchResponse`]. Success bodies are decoded into the declared type;
//! error bodies are kept as raw JSON in [`ResponseData::Error`].

mod decode;

pub use decode::{decode_error_body, decode_success};

use reqwest::header::HeaderMap;

use crate::error::{ApiError, AuthError, ClientError};

/// Payload of a received response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData<T> {
    /// 2xx response decoded into `T`.
    Success(T),
    /// Non-2xx response. Holds the vendor error body as JSON, or a JSON
    /// string when the body was not JSON.
    Error(serde_json::Value),
}

/// A received HTTP response.
///
/// ## Examples
///
/// ```rust
/// use fetch_core::{FetchResponse, ResponseData};
///
/// let response: FetchResponse<u32> = FetchResponse::new(
///     404,
///     Default::default(),
///     ResponseData::Error(serde_json::json!({"error": "not found"})),
/// );
/// assert!(!response.is_success());
/// assert_eq!(response.error_body().unwrap()["error"], "not found");
/// assert!(response.into_result().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FetchResponse<T> {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Decoded payload.
    pub data: ResponseData<T>,
}

impl<T> FetchResponse<T> {
    pub fn new(status: u16, headers: HeaderMap, data: ResponseData<T>) -> Self {
        Self {
            status,
            headers,
            data,
        }
    }

    /// Returns `true` for a 2xx response.
    pub fn is_success(&self) -> bool {
        matches!(self.data, ResponseData::Success(_))
    }

    /// The decoded success payload, if any.
    pub fn success(&self) -> Option<&T> {
        match &self.data {
            ResponseData::Success(value) => Some(value),
            ResponseData::Error(_) => None,
        }
    }

    /// The vendor error body, if the status was not 2xx.
    pub fn error_body(&self) -> Option<&serde_json::Value> {
        match &self.data {
            ResponseData::Success(_) => None,
            ResponseData::Error(body) => Some(body),
        }
    }

    /// Transforms the success payload, keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResponse<U> {
        let data = match self.data {
            ResponseData::Success(value) => ResponseData::Success(f(value)),
            ResponseData::Error(body) => ResponseData::Error(body),
        };
        FetchResponse {
            status: self.status,
            headers: self.headers,
            data,
        }
    }

    /// Converts to a plain `Result` for callers that want `?`.
    ///
    /// 401 maps to [`AuthError::AuthenticationFailed`], 403 to
    /// [`AuthError::Forbidden`], anything else to
    /// [`ClientError::HttpStatus`]. The error body is rendered as text.
    ///
    /// ## Errors
    ///
    /// Returns an [`ApiError`] for any non-2xx response.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self.data {
            ResponseData::Success(value) => Ok(value),
            ResponseData::Error(body) => {
                let message = match body {
                    serde_json::Value::String(text) => text,
                    other => other.to_string(),
                };
                Err(match self.status {
                    401 => AuthError::AuthenticationFailed { message }.into(),
                    403 => AuthError::Forbidden { message }.into(),
                    status => ClientError::HttpStatus { status, message }.into(),
                })
            }
        }
    }
}
