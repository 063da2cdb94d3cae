//! Server URL selection and `{variable}` resolution.
//!
//! An API may declare one or more [`ServerDefinition`]s, each a URL template
//! with default values for its variables. [`resolve_server`] turns a caller
//! supplied URL (or template) plus variables into the concrete base URL used
//! for every request.

use url::Url;

use crate::error::ConfigError;

/// A server URL template declared by an API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerDefinition {
    /// URL template, e.g. `https://{region}.api.example.com/{basePath}`.
    pub url: &'static str,
    /// `(name, default)` pairs for the template's variables.
    pub variables: &'static [(&'static str, &'static str)],
}

impl ServerDefinition {
    pub const fn new(url: &'static str) -> Self {
        Self {
            url,
            variables: &[],
        }
    }

    pub const fn with_variables(
        url: &'static str,
        variables: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { url, variables }
    }
}

/// Resolves a server URL template into a concrete base URL.
///
/// Placeholders are filled from `variables` first, then from the defaults
/// of a declared server whose template matches `url` exactly. The template
/// is scanned once, so a value containing `{name}` is kept as written. The result
/// has no trailing `/` so endpoint paths can be appended directly.
///
/// ## Errors
///
/// - [`ConfigError::UnresolvedServerVariable`] if a placeholder has no value
/// - [`ConfigError::InvalidUrl`] if the result is not an absolute URL
///
/// ## Examples
///
/// ```rust
/// use fetch_core::server::resolve_server;
///
/// let base = resolve_server("https://{region}.example.com", &[("region", "eu")], &[]).unwrap();
/// assert_eq!(base, "https://eu.example.com");
/// ```
pub fn resolve_server(
    url: &str,
    variables: &[(&str, &str)],
    known: &[ServerDefinition],
) -> Result<String, ConfigError> {
    let defaults: &[(&str, &str)] = known
        .iter()
        .find(|server| server.url == url)
        .map(|server| server.variables)
        .unwrap_or_default();

    let mut resolved = String::with_capacity(url.len());
    let mut rest = url;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];
        let value = variables
            .iter()
            .chain(defaults.iter())
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| ConfigError::UnresolvedServerVariable {
                name: name.to_string(),
            })?;
        resolved.push_str(&rest[..open]);
        resolved.push_str(value);
        rest = &after[close + 1..];
    }
    resolved.push_str(rest);

    let resolved = resolved.trim_end_matches('/').to_string();
    Url::parse(&resolved)?;
    Ok(resolved)
}
