//! HTTP method types for REST endpoints.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods used by endpoint descriptors.
///
/// Vendor tables spell methods in lowercase (`'get'`, `'put'`), so parsing
/// is case-insensitive while display is always uppercase.
///
/// ## Examples
///
/// ```rust
/// use fetch_core::RestMethod;
///
/// let method: RestMethod = "put".parse().unwrap();
/// assert_eq!(method, RestMethod::Put);
/// assert_eq!(method.to_string(), "PUT");
/// assert!(method.has_body());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource or collection.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace or update a resource.
    Put,
    /// HTTP PATCH - Partially update a resource.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if this method typically carries a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
