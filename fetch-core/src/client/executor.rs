//! Request execution with tracing instrumentation.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn, Span};
use url::Url;

use crate::auth::{Credentials, SecurityScheme};
use crate::client::{ConfigOptions, FetchClientBuilder, FetchRequest};
use crate::endpoint::{check_template, substitute, EndpointDescriptor};
use crate::error::{ApiError, ClientError, ConfigError, ValidationError};
use crate::method::RestMethod;
use crate::response::{decode_error_body, decode_success, FetchResponse, ResponseData};
use crate::server::{resolve_server, ServerDefinition};

/// Async HTTP client shared by every operation of an API.
///
/// Any received response resolves as `Ok(FetchResponse)`, whatever its
/// status. `Err` is reserved for problems that stop a response from being
/// received or understood: bad configuration, a missing path parameter, a
/// network failure or timeout, or a 2xx body that does not decode.
///
/// ## Examples
///
/// ```rust,no_run
/// use fetch_core::{Credentials, FetchClient, FetchRequest, RestMethod, SecurityScheme};
///
/// # async fn run() -> Result<(), fetch_core::ApiError> {
/// let client = FetchClient::builder("https://api.example.com/v1")
///     .security(SecurityScheme::Bearer { header: None })
///     .credentials(Credentials::token("sk-xxx"))
///     .build()?;
///
/// let response = client
///     .fetch("/users/{id}", RestMethod::Get, FetchRequest::new().param("id", 42))
///     .await?;
/// println!("{} {:?}", response.status, response.data);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    security: SecurityScheme,
    credentials: Option<Credentials>,
    servers: Vec<ServerDefinition>,
}

impl FetchClient {
    /// Creates a new builder for the given base URL or server template.
    pub fn builder(base_url: impl Into<String>) -> FetchClientBuilder {
        FetchClientBuilder::new(base_url)
    }

    /// Creates a client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    pub(crate) fn from_parts(
        http: reqwest::Client,
        base_url: String,
        timeout: Duration,
        security: SecurityScheme,
        credentials: Option<Credentials>,
        servers: Vec<ServerDefinition>,
    ) -> Self {
        Self {
            http,
            base_url,
            timeout,
            security,
            credentials,
            servers,
        }
    }

    /// The resolved base URL, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn security(&self) -> SecurityScheme {
        self.security
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Applies request-wide options to all subsequent requests.
    pub fn configure(&mut self, options: ConfigOptions) {
        if let Some(timeout) = options.timeout {
            self.timeout = timeout;
        }
    }

    /// Sets the credentials attached to all subsequent requests.
    ///
    /// Replaces any earlier credentials, so each request carries exactly one.
    pub fn set_auth(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Points the client at a different server.
    ///
    /// `url` may be a template; its `{variables}` are filled from
    /// `variables` and then from the defaults of a declared server with the
    /// same template. The client is left unchanged on error.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if a variable is unresolved or the result is
    /// not a valid URL.
    pub fn set_server(&mut self, url: &str, variables: &[(&str, &str)]) -> Result<(), ConfigError> {
        self.base_url = resolve_server(url, variables, &self.servers)?;
        Ok(())
    }

    /// Executes a request against a raw path template.
    ///
    /// The response body is returned as JSON.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::UnexpectedBody`] if a body is given for a
    /// method that carries none; otherwise see [`FetchClient::execute`].
    pub async fn fetch(
        &self,
        path: &str,
        method: RestMethod,
        request: FetchRequest,
    ) -> Result<FetchResponse<Value>, ApiError> {
        if request.body.is_some() && !method.has_body() {
            return Err(ValidationError::UnexpectedBody {
                endpoint: format!("{method} {path}"),
            }
            .into());
        }
        self.send(path, method, request).await
    }

    /// Executes the operation described by `endpoint`.
    ///
    /// Path placeholders are filled from `request.params`; the remaining
    /// params become the query string. A 2xx body is decoded into `T`; any
    /// other status yields [`ResponseData::Error`] with the raw error body.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - the body does not match the descriptor's [`BodyKind`](crate::BodyKind)
    ///   (no request is sent)
    /// - a path parameter is missing or malformed (no request is sent)
    /// - the request fails or times out (no retry is attempted)
    /// - a 2xx body cannot be decoded into `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &EndpointDescriptor,
        request: FetchRequest,
    ) -> Result<FetchResponse<T>, ApiError> {
        debug!(endpoint.id = endpoint.id, "executing endpoint");
        endpoint.check_body(request.body.is_some())?;
        self.send(endpoint.path, endpoint.method, request).await
    }

    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(
            http.method = %method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        method: RestMethod,
        request: FetchRequest,
    ) -> Result<FetchResponse<T>, ApiError> {
        let url = self.build_url(path, &request)?;
        Span::current().record("http.url", url.as_str());

        let mut builder = self
            .http
            .request(method.to_reqwest(), url)
            .timeout(self.timeout);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder = self.apply_auth(builder)?;

        debug!(has_body = request.body.is_some(), "sending request");
        let timeout_ms = duration_ms(self.timeout);
        let response = match builder.send().await {
            Ok(response) => response,
            Err(error) => {
                let error = ClientError::from_transport(error, timeout_ms);
                Span::current().record("otel.status_code", "ERROR");
                warn!(error = %error, "request failed");
                return Err(error.into());
            }
        };

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_transport(e, timeout_ms))?;

        if status.is_success() {
            Span::current().record("otel.status_code", "OK");
            let data = decode_success(&body)?;
            return Ok(FetchResponse::new(
                status_code,
                headers,
                ResponseData::Success(data),
            ));
        }

        let otel_status = if status.is_server_error() {
            "ERROR"
        } else {
            "UNSET"
        };
        Span::current().record("otel.status_code", otel_status);
        warn!(status = status_code, "non-success status");

        Ok(FetchResponse::new(
            status_code,
            headers,
            ResponseData::Error(decode_error_body(&body)),
        ))
    }

    /// Joins the base URL and the filled-in path, then appends the query.
    ///
    /// No `?` is added when there are no query parameters.
    fn build_url(&self, template: &str, request: &FetchRequest) -> Result<Url, ApiError> {
        check_template(template)?;
        let (path_values, query) = request.params.split(template)?;
        let path = substitute(template, &path_values)?;

        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(ConfigError::from)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let Some(credentials) = &self.credentials else {
            if self.security != SecurityScheme::None {
                debug!("no credentials configured");
            }
            return Ok(request);
        };
        Ok(self.security.apply(request, credentials)?)
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
