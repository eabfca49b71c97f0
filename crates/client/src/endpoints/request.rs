//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that fail with HTTP 429 (Too Many Requests) are retried. The
//! delay is the `Retry-After` header when the server sends one, otherwise
//! 2^attempt seconds. Every other non-success status is turned into
//! [`ClientError::ApiError`] carrying the server's message.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiErrorResponse;

/// Headers that may carry the server-side request id, in lookup order.
const REQUEST_ID_HEADERS: [&str; 2] = ["x-request-id", "DD-Request-ID"];

/// Sends an HTTP request, retrying rate-limited attempts.
///
/// `max_retries` counts retries, so at most `max_retries + 1` requests are
/// sent. `endpoint` and `method` only feed log fields.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when every attempt was rate
/// limited, `ClientError::ApiError` for any other non-success status, and
/// `ClientError::HttpError` for transport failures.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                if attempt == 0 {
                    debug!(endpoint, method, "Request builder cannot be cloned, single attempt only");
                    return check_status(builder.send().await?).await;
                }
                debug!(endpoint, method, "Cannot clone request builder for retry");
                return Err(ClientError::MaxRetriesExceeded(attempt));
            }
        };

        let response = attempt_builder.send().await?;
        if response.status().as_u16() != 429 {
            if attempt > 0 && response.status().is_success() {
                debug!(endpoint, method, attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response).await;
        }

        if attempt == max_retries {
            debug!(
                endpoint,
                method,
                attempts = attempt + 1,
                "Max retries exhausted for rate-limited request"
            );
            break;
        }

        let backoff = retry_after(&response).unwrap_or_else(|| exponential_backoff(attempt));
        debug!(
            endpoint,
            method,
            attempt = attempt + 1,
            max_retries = max_retries + 1,
            backoff_ms = backoff.as_millis() as u64,
            "Rate limited (HTTP 429), retrying"
        );
        tokio::time::sleep(backoff).await;
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Pass successful responses through and convert the rest into `ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = REQUEST_ID_HEADERS.iter().find_map(|name| {
        response
            .headers()
            .get(*name)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
    });
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::ApiError {
        status,
        url,
        message: error_message(&body),
        request_id,
    })
}

/// Join the API's `errors` array, or fall back to the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors.join("; "),
        _ => body.to_string(),
    }
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

fn exponential_backoff(attempt: usize) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_joins_errors() {
        let body = r#"{"errors": ["Invalid cell", "Missing name"]}"#;
        assert_eq!(error_message(body), "Invalid cell; Missing name");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("upstream timeout"), "upstream timeout");
        assert_eq!(error_message(r#"{"errors": []}"#), r#"{"errors": []}"#);
    }

    #[test]
    fn test_exponential_backoff() {
        assert_eq!(exponential_backoff(0), Duration::from_secs(1));
        assert_eq!(exponential_backoff(1), Duration::from_secs(2));
        assert_eq!(exponential_backoff(2), Duration::from_secs(4));
    }
}
