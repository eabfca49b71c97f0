//! Validation tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test timeout bounds (zero, max boundary, valid values).
//! - Test max retries bounds.
//! - Test API URL validation and normalization.
//! - Test required credentials.

use crate::constants::{MAX_MAX_RETRIES, MAX_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use std::time::Duration;

fn keyed() -> ConfigLoader {
    ConfigLoader::new()
        .with_api_key("api".to_string())
        .with_app_key("app".to_string())
}

#[test]
fn test_timeout_zero_invalid() {
    let result = keyed().with_timeout(Duration::from_secs(0)).build();
    match result {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(message.contains("must be greater than 0"), "got: {message}");
        }
        other => panic!("Expected InvalidTimeout error, got {other:?}"),
    }
}

#[test]
fn test_timeout_exceeds_max_invalid() {
    let result = keyed()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();
    match result {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(message.contains("exceeds maximum"), "got: {message}");
        }
        other => panic!("Expected InvalidTimeout error, got {other:?}"),
    }
}

#[test]
fn test_timeout_at_max_valid() {
    let config = keyed()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS))
        .build()
        .unwrap();
    assert_eq!(config.connection.timeout.as_secs(), MAX_TIMEOUT_SECS);
}

#[test]
fn test_max_retries_bounds() {
    assert!(keyed().with_max_retries(0).build().is_ok());
    assert!(keyed().with_max_retries(MAX_MAX_RETRIES).build().is_ok());
    assert!(matches!(
        keyed().with_max_retries(MAX_MAX_RETRIES + 1).build(),
        Err(ConfigError::InvalidMaxRetries { .. })
    ));
}

#[test]
fn test_api_url_trailing_slash_stripped() {
    let config = keyed()
        .with_api_url("  https://api.us5.datadoghq.com/  ".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.api_url, "https://api.us5.datadoghq.com");
}

#[test]
fn test_api_url_rejects_other_schemes() {
    let result = keyed().with_api_url("ftp://example.com".to_string()).build();
    match result {
        Err(ConfigError::InvalidValue { var, message }) => {
            assert_eq!(var, "api_url");
            assert!(message.contains("ftp"));
        }
        other => panic!("Expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_api_url_rejects_relative() {
    assert!(matches!(
        keyed().with_api_url("/api/v1".to_string()).build(),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_missing_keys() {
    assert!(matches!(
        ConfigLoader::new().build(),
        Err(ConfigError::MissingApiKey)
    ));
    assert!(matches!(
        ConfigLoader::new().with_api_key("api".to_string()).build(),
        Err(ConfigError::MissingAppKey)
    ));
}
