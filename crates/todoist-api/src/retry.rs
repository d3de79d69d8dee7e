//! Retry logic for HTTP requests with exponential backoff.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;
use tracing::debug;

use crate::error::{ApiError, Error, Result};

/// Default initial backoff duration for retries (1 second).
pub(crate) const DEFAULT_INITIAL_BACKOFF_SECS: u64 = 1;

/// Default maximum backoff duration for retries (30 seconds).
pub(crate) const DEFAULT_MAX_BACKOFF_SECS: u64 = 30;

/// Default maximum number of retry attempts.
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for retry behavior.
#[derive(Clone, Debug)]
pub(crate) struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Initial backoff duration for retries.
    pub initial_backoff: Duration,
    /// Maximum backoff duration for retries.
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: Duration::from_secs(DEFAULT_INITIAL_BACKOFF_SECS),
            max_backoff: Duration::from_secs(DEFAULT_MAX_BACKOFF_SECS),
        }
    }
}

impl RetryConfig {
    /// Calculates the backoff duration for a retry attempt.
    ///
    /// A `retry_after` value from a 429 response wins over the exponential
    /// schedule (`initial * 2^attempt`). Both are capped at `max_backoff`.
    pub fn calculate_backoff(&self, attempt: u32, retry_after: Option<u64>) -> Duration {
        let backoff = match retry_after {
            Some(secs) => Duration::from_secs(secs),
            None => self
                .initial_backoff
                .saturating_mul(2u32.saturating_pow(attempt)),
        };
        backoff.min(self.max_backoff)
    }
}

/// Reads the `Retry-After` header in seconds, if present.
pub(crate) fn retry_after(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
}

/// Sends a request, retrying while the API answers 429.
///
/// Returns the first response that is not a retryable rate limit. On the
/// final attempt the 429 response itself is returned so the caller can map
/// it to [`ApiError::RateLimit`].
pub(crate) async fn send_with_retry<F, Fut>(
    config: &RetryConfig,
    mut make_request: F,
) -> Result<reqwest::Response>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<reqwest::Response, reqwest::Error>>,
{
    for attempt in 0..=config.max_retries {
        let response = make_request().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS && attempt < config.max_retries {
            let backoff = config.calculate_backoff(attempt, retry_after(&response));
            debug!(attempt, backoff_ms = backoff.as_millis() as u64, "rate limited, backing off");
            sleep(backoff).await;
            continue;
        }

        return Ok(response);
    }

    Err(Error::Api(ApiError::RateLimit { retry_after: None }))
}

/// Parses an error response into our error types.
pub(crate) async fn parse_error_response(response: reqwest::Response, endpoint: &str) -> Error {
    let status = response.status();
    let status_code = status.as_u16();
    let retry_after = retry_after(&response);

    let message = response.text().await.unwrap_or_default();
    let or_default = |default: &str| {
        if message.is_empty() {
            default.to_string()
        } else {
            message.clone()
        }
    };

    let api_error = match status_code {
        401 | 403 => ApiError::Auth {
            message: or_default("Authentication failed"),
        },
        404 => {
            let (resource, id) = split_endpoint(endpoint);
            ApiError::NotFound { resource, id }
        }
        429 => ApiError::RateLimit { retry_after },
        400 => ApiError::Validation {
            field: None,
            message: or_default("Bad request"),
        },
        _ => ApiError::Http {
            status: status_code,
            message: or_default(status.canonical_reason().unwrap_or("Unknown error")),
        },
    };

    Error::Api(api_error)
}

/// Splits `/tasks/123/close` into `("task", "123")` for not-found errors.
fn split_endpoint(endpoint: &str) -> (String, String) {
    let path = endpoint.split('?').next().unwrap_or_default();
    let mut segments = path.trim_matches('/').split('/');
    let collection = segments.next().filter(|s| !s.is_empty()).unwrap_or("resource");
    let resource = collection.strip_suffix('s').unwrap_or(collection).to_string();
    let id = segments.next().unwrap_or("unknown").to_string();
    (resource, id)
}
