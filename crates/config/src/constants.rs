//! Centralized constants for the notebook workspace.
//!
//! Default values shared by the config, client and CLI crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.datadoghq.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for the retry count.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_API_URL: &str = "DD_HOST";
pub const ENV_API_KEY: &str = "DD_API_KEY";
pub const ENV_APP_KEY: &str = "DD_APP_KEY";
pub const ENV_TIMEOUT: &str = "DD_HTTP_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "DD_MAX_RETRIES";
pub const ENV_SKIP_VERIFY: &str = "DD_SKIP_VERIFY";
