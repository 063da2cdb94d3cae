//! Authentication: what the API declares and what the caller supplies.
//!
//! An API definition declares one [`SecurityScheme`]. The caller hands over
//! one or two raw values through [`Credentials::from_values`]; the scheme
//! decides where they go on every request (bearer header, API-key header,
//! API-key query parameter, or HTTP Basic).

use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION};

use crate::error::AuthError;

/// Security scheme declared by an API.
///
/// ## Examples
///
/// ```rust
/// use fetch_core::SecurityScheme;
///
/// let bearer = SecurityScheme::Bearer { header: None };
/// let key = SecurityScheme::ApiKeyHeader("X-API-Key");
/// assert_ne!(bearer, key);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecurityScheme {
    /// No authentication. Supplied credentials are ignored.
    #[default]
    None,
    /// HTTP Basic: `Authorization: Basic <base64(user:pass)>`.
    Basic,
    /// Bearer token: `Authorization: Bearer <token>`.
    ///
    /// `header` overrides the header name for APIs that use a custom one.
    Bearer {
        /// Optional header name override.
        header: Option<&'static str>,
    },
    /// API key sent verbatim in the named header.
    ApiKeyHeader(&'static str),
    /// API key sent as the named query parameter.
    ApiKeyQuery(&'static str),
}

/// Credentials supplied by the caller.
///
/// `Debug` output redacts secrets.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// A bearer token or API key.
    Token(String),
    /// A username and password pair.
    Basic {
        /// The username.
        username: String,
        /// The password (may be empty).
        password: String,
    },
}

impl Credentials {
    /// Creates a token credential.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Creates a username/password credential.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Builds credentials from one or two raw values.
    ///
    /// One value is a token; two values are a username and password.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::InvalidCredentialCount`] for zero or more than
    /// two values.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use fetch_core::Credentials;
    ///
    /// assert_eq!(
    ///     Credentials::from_values(&["token123"]).unwrap(),
    ///     Credentials::token("token123")
    /// );
    /// assert!(Credentials::from_values::<&str>(&[]).is_err());
    /// ```
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Result<Self, AuthError> {
        match values {
            [token] => Ok(Self::token(token.as_ref())),
            [username, password] => Ok(Self::basic(username.as_ref(), password.as_ref())),
            other => Err(AuthError::InvalidCredentialCount { count: other.len() }),
        }
    }

    /// The value used for token-style schemes.
    ///
    /// For a username/password pair this is the first value.
    fn primary(&self) -> &str {
        match self {
            Self::Token(token) => token,
            Self::Basic { username, .. } => username,
        }
    }

    /// Username and password for Basic auth.
    ///
    /// A lone token is treated as a username with an empty password.
    fn user_pass(&self) -> (&str, &str) {
        match self {
            Self::Token(token) => (token, ""),
            Self::Basic { username, password } => (username, password),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Credentials::Token(<redacted>)"),
            Self::Basic { username, .. } => f
                .debug_struct("Credentials::Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

impl SecurityScheme {
    /// Attaches `credentials` to a request according to this scheme.
    ///
    /// Each call adds the credential exactly once. Headers use `header()`
    /// (replace semantics in the default header map are not relied upon).
    ///
    /// ## Errors
    ///
    /// Returns an [`AuthError`] if a header name or value is invalid.
    pub fn apply(
        &self,
        request: reqwest::RequestBuilder,
        credentials: &Credentials,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        match self {
            Self::None => Ok(request),
            Self::Basic => {
                let (username, password) = credentials.user_pass();
                Ok(request.basic_auth(username, Some(password)))
            }
            Self::Bearer { header } => {
                let name = match header {
                    Some(name) => header_name(name)?,
                    None => AUTHORIZATION,
                };
                let mut value = HeaderValue::try_from(format!("Bearer {}", credentials.primary()))
                    .map_err(|_| AuthError::InvalidCredential)?;
                value.set_sensitive(true);
                Ok(request.header(name, value))
            }
            Self::ApiKeyHeader(name) => {
                let name = header_name(name)?;
                let mut value = HeaderValue::try_from(credentials.primary())
                    .map_err(|_| AuthError::InvalidCredential)?;
                value.set_sensitive(true);
                Ok(request.header(name, value))
            }
            Self::ApiKeyQuery(name) => Ok(request.query(&[(*name, credentials.primary())])),
        }
    }
}

fn header_name(name: &str) -> Result<HeaderName, AuthError> {
    HeaderName::try_from(name).map_err(|_| AuthError::InvalidHeaderName {
        name: name.to_string(),
    })
}
