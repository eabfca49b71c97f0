//! Types shared across API models.

use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-success responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_errors() {
        let parsed: ApiErrorResponse =
            serde_json::from_str(r#"{"errors": ["Bad Request"]}"#).unwrap();
        assert_eq!(parsed.errors, vec!["Bad Request".to_string()]);
    }
}
