//! Client builder for constructing [`NotebooksClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (api_url, api_key, app_key)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`NotebooksClient`] methods)
//! - Retry logic for failed requests (handled by [`crate::endpoints::send_request_with_retry`])
//!
//! # Invariants
//! - `api_url` and both keys are required before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::SecretString;

use crate::auth::ApiKeys;
use crate::client::NotebooksClient;
use crate::error::{ClientError, Result};
use notebook_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`NotebooksClient`].
pub struct NotebooksClientBuilder {
    api_url: Option<String>,
    api_key: Option<SecretString>,
    app_key: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
}

impl Default for NotebooksClientBuilder {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            app_key: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl NotebooksClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://api.datadoghq.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    pub fn app_key(mut self, key: SecretString) -> Self {
        self.app_key = Some(key);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited requests.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.api_url = Some(config.connection.api_url.clone());
        self.api_key = Some(config.auth.api_key.clone());
        self.app_key = Some(config.auth.app_key.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`NotebooksClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `api_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if either key was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<NotebooksClient> {
        let base_url = self
            .api_url
            .ok_or_else(|| ClientError::InvalidUrl("api_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let api_key = self
            .api_key
            .ok_or_else(|| ClientError::AuthFailed("api_key is required".to_string()))?;
        let app_key = self
            .app_key
            .ok_or_else(|| ClientError::AuthFailed("app_key is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(NotebooksClient {
            http,
            base_url,
            keys: ApiKeys::new(api_key, app_key),
            max_retries: self.max_retries,
        })
    }
}
