use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

use crate::auth::{Credentials, SecurityScheme};
use crate::client::FetchClient;
use crate::error::{ApiError, ClientError, ConfigError};
use crate::server::{resolve_server, ServerDefinition};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent` for clients that do not set their own.
pub const USER_AGENT: &str = concat!("fetch-core/", env!("CARGO_PKG_VERSION"));

/// Request-wide options applied with [`FetchClient::configure`].
///
/// Unset fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOptions {
    /// Per-request timeout.
    pub timeout: Option<Duration>,
}

impl ConfigOptions {
    pub fn timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Builder for configuring a [`FetchClient`].
#[derive(Debug)]
pub struct FetchClientBuilder {
    base_url: String,
    variables: Vec<(String, String)>,
    timeout: Duration,
    default_headers: HeaderMap,
    user_agent: String,
    security: SecurityScheme,
    credentials: Option<Credentials>,
    servers: Vec<ServerDefinition>,
}

impl FetchClientBuilder {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            base_url: base_url.into(),
            variables: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            default_headers,
            user_agent: USER_AGENT.to_string(),
            security: SecurityScheme::None,
            credentials: None,
            servers: Vec::new(),
        }
    }

    /// Sets the base URL (or server template).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets a value for a `{variable}` in the base URL template.
    pub fn server_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push((name.into(), value.into()));
        self
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use fetch_core::FetchClient;
    ///
    /// let client = FetchClient::builder("https://api.example.com")
    ///     .timeout(Duration::from_secs(60))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.timeout(), Duration::from_secs(60));
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the header name or value is
    /// invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = HeaderName::try_from(name.as_ref()).map_err(|e| ConfigError::InvalidHeader {
            message: format!("invalid header name: {e}"),
        })?;
        let value =
            HeaderValue::try_from(value.as_ref()).map_err(|e| ConfigError::InvalidHeader {
                message: format!("invalid header value: {e}"),
            })?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the security scheme declared by the API.
    pub fn security(mut self, security: SecurityScheme) -> Self {
        self.security = security;
        self
    }

    /// Sets the credentials attached to every request.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Declares the servers the API publishes, used for variable defaults.
    pub fn servers(mut self, servers: &[ServerDefinition]) -> Self {
        self.servers = servers.to_vec();
        self
    }

    /// Builds the [`FetchClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL cannot be resolved or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<FetchClient, ApiError> {
        let variables: Vec<(&str, &str)> = self
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        let base_url = resolve_server(&self.base_url, &variables, &self.servers)?;

        let http = reqwest::Client::builder()
            .default_headers(self.default_headers)
            .user_agent(self.user_agent)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(FetchClient::from_parts(
            http,
            base_url,
            self.timeout,
            self.security,
            self.credentials,
            self.servers,
        ))
    }
}
