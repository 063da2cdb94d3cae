//! Static endpoint descriptors and path template handling.
//!
//! An [`EndpointDescriptor`] is plain `const` data: operation id, HTTP
//! method, path template and the shape of the request and response bodies.
//! A whole vendor API is a `&'static [EndpointDescriptor]` table that never
//! changes at runtime.
//!
//! Path templates use `{name}` placeholders. [`placeholders`] lists them in
//! order and [`substitute`] fills them in, encoding each value as a single
//! path segment.

use std::collections::HashSet;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::endpoint_id::EndpointId;
use crate::error::{ConfigError, ValidationError};
use crate::method::RestMethod;

/// How an endpoint expects its request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// No body; any parameters travel in the path or query string.
    None,
    /// A JSON object body.
    Json,
}

/// What an endpoint declares about its success response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// A documented JSON schema, decoded into a named model.
    Model(&'static str),
    /// JSON with no published schema. Decoded as `serde_json::Value` so no
    /// data is thrown away.
    Untyped,
}

/// A single vendor operation.
///
/// ## Examples
///
/// ```rust
/// use fetch_core::{BodyKind, EndpointDescriptor, ResponseKind, RestMethod};
///
/// const GET_USER: EndpointDescriptor =
///     EndpointDescriptor::new("getUsersId", RestMethod::Get, "/users/{id}")
///         .summary("Shows a single user");
///
/// assert_eq!(GET_USER.placeholders(), vec!["id"]);
/// assert_eq!(GET_USER.body, BodyKind::None);
/// assert_eq!(GET_USER.response, ResponseKind::Untyped);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Operation identifier, unique within its table.
    pub id: &'static str,
    /// HTTP method.
    pub method: RestMethod,
    /// Path template relative to the server URL (e.g. `/users/{id}`).
    pub path: &'static str,
    /// One-line summary of the operation.
    pub summary: &'static str,
    /// Longer vendor description, empty when the summary says it all.
    pub description: &'static str,
    /// Request body shape.
    pub body: BodyKind,
    /// Success response shape.
    pub response: ResponseKind,
}

impl EndpointDescriptor {
    /// Creates a descriptor with no body and an untyped response.
    pub const fn new(id: &'static str, method: RestMethod, path: &'static str) -> Self {
        Self {
            id,
            method,
            path,
            summary: "",
            description: "",
            body: BodyKind::None,
            response: ResponseKind::Untyped,
        }
    }

    pub const fn summary(mut self, summary: &'static str) -> Self {
        self.summary = summary;
        self
    }

    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Declares a JSON request body.
    pub const fn json_body(mut self) -> Self {
        self.body = BodyKind::Json;
        self
    }

    /// Declares a documented response model.
    pub const fn returns(mut self, model: &'static str) -> Self {
        self.response = ResponseKind::Model(model);
        self
    }

    /// Placeholder names in the path template, in order of appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        placeholders(self.path)
    }

    /// Checks that a request's body matches the declared [`BodyKind`].
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::MissingBody`] when a JSON body is declared
    /// but absent, and [`ValidationError::UnexpectedBody`] when the
    /// operation takes no body but one was given.
    pub fn check_body(&self, has_body: bool) -> Result<(), ValidationError> {
        match (self.body, has_body) {
            (BodyKind::Json, false) => Err(ValidationError::MissingBody {
                endpoint: self.id.to_string(),
            }),
            (BodyKind::None, true) => Err(ValidationError::UnexpectedBody {
                endpoint: self.id.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Checks the id, the path template and the body declaration.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if the id is not a valid [`EndpointId`],
    /// the path does not start with `/`, a placeholder is malformed, or a
    /// JSON body is declared on a method without one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        EndpointId::validate(self.id)?;
        if self.body == BodyKind::Json && !self.method.has_body() {
            return Err(ConfigError::BodyNotAllowed {
                id: self.id.to_string(),
                method: self.method.to_string(),
            });
        }
        if !self.path.starts_with('/') {
            return Err(ConfigError::invalid_path(format!(
                "{} must start with '/'",
                self.path
            )));
        }
        check_template(self.path)
    }
}

/// Validates every descriptor in a table and rejects repeated ids.
///
/// ## Errors
///
/// Returns the first [`ConfigError`] found, including
/// [`ConfigError::DuplicateEndpoint`].
pub fn validate_table(endpoints: &[EndpointDescriptor]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for endpoint in endpoints {
        endpoint.validate()?;
        if !seen.insert(endpoint.id) {
            return Err(ConfigError::DuplicateEndpoint {
                id: endpoint.id.to_string(),
            });
        }
    }
    Ok(())
}

/// Extracts `{name}` placeholders from a template, in order.
///
/// Unterminated or empty braces are ignored here; [`check_template`]
/// reports them.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];
        if !name.is_empty() && !name.contains('{') {
            names.push(name);
        }
        rest = &after[close + 1..];
    }

    names
}

/// Verifies that every `{` has a matching `}` around a non-empty name.
///
/// ## Errors
///
/// Returns [`ConfigError::InvalidPathTemplate`] describing the first problem.
pub fn check_template(template: &str) -> Result<(), ConfigError> {
    let mut depth_open: Option<usize> = None;

    for (idx, c) in template.char_indices() {
        match (c, depth_open) {
            ('{', None) => depth_open = Some(idx),
            ('{', Some(_)) => {
                return Err(ConfigError::invalid_path(format!(
                    "nested brace in {template}"
                )))
            }
            ('}', Some(start)) => {
                if idx == start + 1 {
                    return Err(ConfigError::invalid_path(format!(
                        "empty placeholder in {template}"
                    )));
                }
                depth_open = None;
            }
            ('}', None) => {
                return Err(ConfigError::invalid_path(format!(
                    "unmatched '}}' in {template}"
                )))
            }
            _ => {}
        }
    }

    if depth_open.is_some() {
        return Err(ConfigError::invalid_path(format!(
            "unclosed brace in {template}"
        )));
    }
    Ok(())
}

/// Characters escaped in a path value: everything except RFC 3986
/// unreserved characters, so `/`, `?`, `#` and `%` never leave the segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Replaces each `{name}` with its percent-encoded value.
///
/// The template is scanned once, left to right, so braces inside a value
/// are never treated as placeholders. Every placeholder must have a value;
/// extra values are ignored.
///
/// ## Errors
///
/// Returns [`ConfigError::MissingPathParameter`] for the first placeholder
/// without a value.
///
/// ## Examples
///
/// ```rust
/// use fetch_core::endpoint::substitute;
///
/// let path = substitute("/users/{id}", &[("id", "42".to_string())]).unwrap();
/// assert_eq!(path, "/users/42");
///
/// let path = substitute("/pages/{id}", &[("id", "a/b?c".to_string())]).unwrap();
/// assert_eq!(path, "/pages/a%2Fb%3Fc");
/// ```
pub fn substitute(template: &str, values: &[(&str, String)]) -> Result<String, ConfigError> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];
        let value = values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
            .ok_or_else(|| ConfigError::MissingPathParameter {
                name: name.to_string(),
                path: template.to_string(),
            })?;

        path.push_str(&rest[..open]);
        path.extend(utf8_percent_encode(value, PATH_SEGMENT));
        rest = &after[close + 1..];
    }

    path.push_str(rest);
    Ok(path)
}
