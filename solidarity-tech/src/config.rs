//! Environment configuration.
//!
//! The API key is read from the first variable in [`API_KEY_VARS`] that is
//! set and non-empty. The base URL and timeout are optional overrides.

use std::fmt;
use std::time::Duration;

use fetch_core::{ApiError, AuthError, ValidationError};

/// API key variables, in lookup order.
pub const API_KEY_VARS: &[&str] = &["SOLIDARITY_TECH_API_KEY", "SOLIDARITY_API_KEY"];

/// Overrides the server URL.
pub const BASE_URL_VAR: &str = "SOLIDARITY_TECH_BASE_URL";

/// Overrides the request timeout, in milliseconds.
pub const TIMEOUT_VAR: &str = "SOLIDARITY_TECH_TIMEOUT_MS";

/// Settings resolved from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl EnvConfig {
    /// Reads the process environment.
    ///
    /// ## Errors
    ///
    /// See [`EnvConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// ## Errors
    ///
    /// - [`AuthError::MissingApiKey`] if none of [`API_KEY_VARS`] is set
    /// - [`ValidationError::InvalidParameter`] if the timeout is not a whole
    ///   number of milliseconds
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use solidarity_tech::EnvConfig;
    ///
    /// let config = EnvConfig::from_lookup(|name| match name {
    ///     "SOLIDARITY_API_KEY" => Some("token123".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.api_key, "token123");
    /// assert!(config.base_url.is_none());
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| present(*var))
            .ok_or_else(|| AuthError::MissingApiKey {
                provider: format!("Solidarity Tech (set {})", API_KEY_VARS.join(" or ")),
            })?;

        let timeout = match present(TIMEOUT_VAR) {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|e| {
                    ValidationError::InvalidParameter {
                        name: TIMEOUT_VAR.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Some(Duration::from_millis(millis))
            }
            None => None,
        };

        Ok(Self {
            api_key,
            base_url: present(BASE_URL_VAR),
            timeout,
        })
    }
}

impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
