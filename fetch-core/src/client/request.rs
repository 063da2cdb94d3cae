use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::params::Params;

/// Per-call inputs: an optional JSON body and the parameter bag.
///
/// ## Examples
///
/// ```rust
/// use fetch_core::{FetchRequest, Params};
/// use serde_json::json;
///
/// let request = FetchRequest::new()
///     .with_body(json!({"first_name": "Ada"}))
///     .param("id", 42);
/// assert_eq!(request.params, Params::new().with("id", 42));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchRequest {
    /// JSON request body, sent as `application/json` when present.
    pub body: Option<Value>,
    /// Path and query parameters.
    pub params: Params,
}

impl FetchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `body` as the JSON payload.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::RequestEncoding`] if serialization fails.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ValidationError> {
        self.body = Some(serde_json::to_value(body).map_err(ValidationError::encoding)?);
        Ok(self)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Replaces the parameter bag.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Adds a single parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key, value);
        self
    }
}
