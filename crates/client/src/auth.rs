//! API credentials attached to every request.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "DD-API-KEY";
/// Header carrying the application key.
pub const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

/// API and application key pair.
#[derive(Debug, Clone)]
pub struct ApiKeys {
    api_key: SecretString,
    app_key: SecretString,
}

impl ApiKeys {
    pub fn new(api_key: SecretString, app_key: SecretString) -> Self {
        Self { api_key, app_key }
    }

    /// Attach both key headers and the JSON accept header.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(APP_KEY_HEADER, self.app_key.expose_secret())
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_keys() {
        let keys = ApiKeys::new(
            SecretString::new("api-secret".to_string().into()),
            SecretString::new("app-secret".to_string().into()),
        );
        let debug = format!("{keys:?}");
        assert!(!debug.contains("api-secret"));
        assert!(!debug.contains("app-secret"));
    }

    #[test]
    fn test_apply_sets_headers() {
        let keys = ApiKeys::new(
            SecretString::new("a".to_string().into()),
            SecretString::new("b".to_string().into()),
        );
        let request = keys
            .apply(reqwest::Client::new().get("http://localhost/api/v1/notebooks/1"))
            .build()
            .unwrap();
        assert_eq!(request.headers()[API_KEY_HEADER], "a");
        assert_eq!(request.headers()[APP_KEY_HEADER], "b");
        assert_eq!(request.headers()["accept"], "application/json");
    }
}
