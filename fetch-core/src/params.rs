//! Parameter bag for path and query values.
//!
//! [`Params`] is an ordered JSON object. When a request is built, keys that
//! match a `{placeholder}` in the path template are substituted into the
//! path. Every other key becomes a query parameter.
//!
//! Query encoding follows the OpenAPI `form` style with `explode`:
//! - scalars are written as-is (`true`, `42`, `eu`)
//! - arrays repeat the key (`tag=a&tag=b`)
//! - objects use bracketed keys (`filter[name]=x`)
//! - `null` is skipped

use serde::Serialize;
use serde_json::{Map, Value};

use crate::endpoint::placeholders;
use crate::error::ValidationError;

/// Ordered parameters for one request.
///
/// ## Examples
///
/// ```rust
/// use fetch_core::Params;
///
/// let params = Params::new().with("id", 42).with("_limit", 10);
/// let (path, query) = params.split("/users/{id}").unwrap();
/// assert_eq!(path, vec![("id", "42".to_string())]);
/// assert_eq!(query, vec![("_limit".to_string(), "10".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

/// Path values keyed by placeholder, and flattened query pairs.
pub type SplitParams<'t> = (Vec<(&'t str, String)>, Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds params from any serializable struct or map.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::RequestEncoding`] if the value does not
    /// serialize to a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ValidationError> {
        match serde_json::to_value(value).map_err(ValidationError::encoding)? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(ValidationError::encoding(format!(
                "parameters must serialize to an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Adds or replaces a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merges `other` into `self`; keys in `other` win.
    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// Splits into path values for `template` and query pairs for the rest.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::InvalidParameter`] if a path value is not a
    /// string, number or boolean, or is empty, `.` or `..`.
    pub fn split<'t>(&self, template: &'t str) -> Result<SplitParams<'t>, ValidationError> {
        let names = placeholders(template);
        let mut path = Vec::with_capacity(names.len());
        let mut query = Vec::new();

        for (key, value) in &self.0 {
            if let Some(name) = names.iter().find(|name| **name == key.as_str()) {
                path.push((*name, path_value(key, value)?));
            } else {
                flatten_query(key.clone(), value, &mut query);
            }
        }

        Ok((path, query))
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn path_value(key: &str, value: &Value) -> Result<String, ValidationError> {
    match value {
        // URL parsers collapse these segments even when percent-encoded.
        Value::String(s) if matches!(s.as_str(), "" | "." | "..") => {
            Err(ValidationError::InvalidParameter {
                name: key.to_string(),
                reason: format!("{s:?} is not a usable path segment"),
            })
        }
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ValidationError::InvalidParameter {
            name: key.to_string(),
            reason: format!("{} cannot be placed in a path", json_kind(other)),
        }),
    }
}

fn flatten_query(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push((key, s.clone())),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::Bool(b) => out.push((key, b.to_string())),
        Value::Array(items) => {
            for item in items {
                flatten_query(key.clone(), item, out);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                flatten_query(format!("{key}[{sub}]"), item, out);
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
