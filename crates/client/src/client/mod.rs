//! Main notebooks API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `notebooks`: Notebook CRUD methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Translation between declarative configuration and API models
//!
//! # Invariants
//! - Every request carries both API key headers.
//! - Rate-limited requests are retried up to `max_retries` times.

pub mod builder;
mod notebooks;

use crate::auth::ApiKeys;

/// Notebooks API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use notebook_client::NotebooksClient;
/// use secrecy::SecretString;
///
/// let client = NotebooksClient::builder()
///     .api_url("https://api.datadoghq.com".to_string())
///     .api_key(SecretString::new("api".to_string().into()))
///     .app_key(SecretString::new("app".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct NotebooksClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) keys: ApiKeys,
    pub(crate) max_retries: usize,
}

impl NotebooksClient {
    /// Create a new client builder.
    pub fn builder() -> builder::NotebooksClientBuilder {
        builder::NotebooksClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Maximum number of retries for rate-limited requests.
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}
