//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use notebook_client::endpoints;
#[allow(unused_imports)]
pub use notebook_client::testing::load_fixture;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use notebook_client::ApiKeys;
use secrecy::SecretString;

/// Keys sent by every test request.
#[allow(dead_code)]
pub fn test_keys() -> ApiKeys {
    ApiKeys::new(
        SecretString::new("test-api-key".to_string().into()),
        SecretString::new("test-app-key".to_string().into()),
    )
}
