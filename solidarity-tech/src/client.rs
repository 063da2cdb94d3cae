//! The Solidarity Tech client.

use std::time::Duration;

use fetch_core::client::USER_AGENT;
use fetch_core::{
    ApiError, AuthError, ConfigError, ConfigOptions, Credentials, EndpointDescriptor, FetchClient,
    FetchClientBuilder, FetchRequest, FetchResponse,
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::catalog::{BASE_URL, SECURITY, SERVERS};
use crate::config::EnvConfig;
use crate::profile::Profile;
use crate::types::ResourceId;

fn user_agent() -> String {
    format!("solidarity-tech/v1 ({USER_AGENT})")
}

/// Builder for a [`SolidarityTech`] client.
#[derive(Debug)]
pub struct SolidarityTechBuilder {
    core: FetchClientBuilder,
    profile: Profile,
}

impl SolidarityTechBuilder {
    fn new() -> Self {
        Self {
            core: FetchClient::builder(BASE_URL)
                .security(SECURITY)
                .servers(SERVERS)
                .user_agent(user_agent()),
            profile: Profile::Full,
        }
    }

    /// Overrides the server URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.core = self.core.base_url(base_url);
        self
    }

    /// Sets a value for a `{variable}` in the server URL.
    pub fn server_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.core = self.core.server_variable(name, value);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.core = self.core.timeout(timeout);
        self
    }

    /// Sets the API key sent as a bearer token.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.core = self.core.credentials(Credentials::token(api_key));
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        self.core = self.core.default_header(name, value)?;
        Ok(self)
    }

    /// Restricts the client to a subset of operations.
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Builds the client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the server URL cannot be resolved or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<SolidarityTech, ApiError> {
        Ok(SolidarityTech {
            core: self.core.build()?,
            profile: self.profile,
        })
    }
}

/// Client for the Solidarity Tech REST API.
///
/// Each vendor operation is a method that forwards to the shared fetch
/// core. Every method resolves with a [`FetchResponse`] for any response the
/// server sends, including 4xx and 5xx; see [`FetchResponse::into_result`]
/// for `?`-style handling.
///
/// ## Examples
///
/// ```rust,no_run
/// use solidarity_tech::{ListParams, SolidarityTech};
///
/// # async fn run() -> Result<(), fetch_core::ApiError> {
/// let mut sdk = SolidarityTech::new()?;
/// sdk.auth(&["my-api-key"])?;
///
/// let users = sdk.get_users(ListParams::new().limit(20)).await?.into_result()?;
/// for user in users.data {
///     println!("{:?} {:?}", user.first_name, user.email);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SolidarityTech {
    core: FetchClient,
    profile: Profile,
}

impl SolidarityTech {
    /// Creates a client for the production server with no credentials.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    pub fn builder() -> SolidarityTechBuilder {
        SolidarityTechBuilder::new()
    }

    /// Creates a client for a different server, such as a mock.
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder().base_url(base_url).build()
    }

    /// Creates a client configured from environment variables.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::MissingApiKey`] if no API key is set, or an
    /// error if an override is invalid.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_config(EnvConfig::from_env()?)
    }

    /// Like [`SolidarityTech::from_env`], reading variables through `lookup`.
    ///
    /// ## Errors
    ///
    /// See [`SolidarityTech::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        Self::from_config(EnvConfig::from_lookup(lookup)?)
    }

    fn from_config(config: EnvConfig) -> Result<Self, ApiError> {
        let mut builder = Self::builder().api_key(config.api_key);
        if let Some(base_url) = config.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Applies request-wide options, such as the timeout.
    pub fn config(&mut self, options: ConfigOptions) {
        self.core.configure(options);
    }

    /// Sets the credentials for all subsequent requests.
    ///
    /// One value is the API key. Two values are a username and password;
    /// the API uses bearer auth, so only the first is sent.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::InvalidCredentialCount`] for zero or more than
    /// two values.
    pub fn auth<S: AsRef<str>>(&mut self, values: &[S]) -> Result<&mut Self, AuthError> {
        self.core.set_auth(Credentials::from_values(values)?);
        Ok(self)
    }

    /// Switches to another server URL, filling `{variables}` from
    /// `variables`.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if a variable is unresolved or the URL is
    /// invalid. The previous server stays in effect.
    pub fn server(&mut self, url: &str, variables: &[(&str, &str)]) -> Result<(), ConfigError> {
        self.core.set_server(url, variables)?;
        debug!(base_url = self.core.base_url(), "server changed");
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.core.base_url()
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// The underlying fetch client.
    pub fn core(&self) -> &FetchClient {
        &self.core
    }

    /// Executes any catalog operation with a hand-built request.
    ///
    /// Used by every operation method; also useful for parameters the typed
    /// methods do not expose.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::EndpointNotEnabled`] without sending anything
    /// if the operation is outside the client's profile, otherwise whatever
    /// [`FetchClient::execute`] returns.
    #[instrument(
        name = "solidarity_tech_call",
        skip(self, endpoint, request),
        fields(endpoint.id = endpoint.id, profile = %self.profile)
    )]
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &EndpointDescriptor,
        request: FetchRequest,
    ) -> Result<FetchResponse<T>, ApiError> {
        if let Err(error) = self.profile.check(endpoint) {
            warn!(error = %error, "operation rejected by profile");
            return Err(error.into());
        }
        self.core.execute(endpoint, request).await
    }
}

/// Request carrying only the `id` path parameter.
pub(crate) fn by_id(id: impl Into<ResourceId>) -> FetchRequest {
    let id: ResourceId = id.into();
    FetchRequest::new().param("id", id.as_str())
}
