//! HTTP client wrapper for the Todoist REST API.

use std::fmt;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::retry::{parse_error_response, send_with_retry, RetryConfig};

/// Base URL for the Todoist REST API v1.
pub const BASE_URL: &str = "https://api.todoist.com/rest/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for interacting with the Todoist REST API.
///
/// Resource operations (projects, sections, tasks, comments, labels) are
/// implemented on this type as well.
#[derive(Clone)]
pub struct TodoistClient {
    token: String,
    http_client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

/// Builder for [`TodoistClient`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use todoist_api_rs::client::TodoistClient;
///
/// let client = TodoistClient::builder("token")
///     .max_retries(5)
///     .request_timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// assert_eq!(client.max_retries(), 5);
/// ```
#[derive(Clone)]
pub struct TodoistClientBuilder {
    token: String,
    base_url: String,
    retry: RetryConfig,
    request_timeout: Duration,
}

impl TodoistClientBuilder {
    /// Creates a builder with default settings.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: BASE_URL.to_string(),
            retry: RetryConfig::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets how many times a rate-limited request is retried.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.retry.max_retries = max_retries;
        self
    }

    /// Sets the first backoff delay.
    pub fn initial_backoff(mut self, backoff: Duration) -> Self {
        self.retry.initial_backoff = backoff;
        self
    }

    /// Sets the cap on backoff delays.
    pub fn max_backoff(mut self, backoff: Duration) -> Self {
        self.retry.max_backoff = backoff;
        self
    }

    /// Sets the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn build(self) -> Result<TodoistClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()?;

        Ok(TodoistClient {
            token: self.token,
            http_client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            retry: self.retry,
        })
    }
}

impl TodoistClient {
    /// Creates a new TodoistClient with the given API token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        TodoistClientBuilder::new(token).build()
    }

    /// Creates a new TodoistClient with a custom base URL.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        TodoistClientBuilder::new(token).base_url(base_url).build()
    }

    /// Returns a builder for a customized client.
    pub fn builder(token: impl Into<String>) -> TodoistClientBuilder {
        TodoistClientBuilder::new(token)
    }

    /// Returns the API token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the maximum number of retries on 429.
    pub fn max_retries(&self) -> u32 {
        self.retry.max_retries
    }

    /// Returns the initial backoff.
    pub fn initial_backoff(&self) -> Duration {
        self.retry.initial_backoff
    }

    /// Returns the backoff cap.
    pub fn max_backoff(&self) -> Duration {
        self.retry.max_backoff
    }

    #[cfg(test)]
    pub(crate) fn calculate_backoff(&self, attempt: u32, retry_after: Option<u64>) -> Duration {
        self.retry.calculate_backoff(attempt, retry_after)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Performs a GET request and decodes the JSON body.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path (e.g., "/tasks", "/projects/123")
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.send_get(endpoint, None).await?;
        self.handle_response(response, endpoint).await
    }

    /// Performs a GET request with query parameters.
    ///
    /// `query` is encoded with `serde_urlencoded`; fields that serialize to
    /// nothing are omitted and an empty query adds no `?`.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: &Q,
    ) -> Result<T> {
        let query = serde_urlencoded::to_string(query)?;
        let query = (!query.is_empty()).then_some(query);
        let response = self.send_get(endpoint, query.as_deref()).await?;
        self.handle_response(response, endpoint).await
    }

    /// Performs a GET request, mapping 404 to `None`.
    pub async fn get_optional<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>> {
        let response = self.send_get(endpoint, None).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!(endpoint, "resource not found");
            return Ok(None);
        }
        self.handle_response(response, endpoint).await.map(Some)
    }

    /// Performs a POST request with a JSON body and decodes the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.send_post(endpoint, Some(body)).await?;
        self.handle_response(response, endpoint).await
    }

    /// Performs a POST request with a JSON body, expecting no response body.
    pub async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<()> {
        let response = self.send_post(endpoint, Some(body)).await?;
        self.handle_empty_response(response, endpoint).await
    }

    /// Performs a POST request without a body (for endpoints like /tasks/{id}/close).
    pub async fn post_empty(&self, endpoint: &str) -> Result<()> {
        let response = self.send_post::<()>(endpoint, None).await?;
        self.handle_empty_response(response, endpoint).await
    }

    /// Performs a DELETE request to the given endpoint.
    pub async fn delete(&self, endpoint: &str) -> Result<()> {
        let url = self.url(endpoint);
        debug!(method = "DELETE", %url, "sending request");

        let response = send_with_retry(&self.retry, || {
            self.http_client
                .delete(&url)
                .bearer_auth(&self.token)
                .send()
        })
        .await?;

        self.handle_empty_response(response, endpoint).await
    }

    async fn send_get(&self, endpoint: &str, query: Option<&str>) -> Result<reqwest::Response> {
        let url = match query {
            Some(query) => format!("{}?{}", self.url(endpoint), query),
            None => self.url(endpoint),
        };
        debug!(method = "GET", %url, "sending request");

        send_with_retry(&self.retry, || {
            self.http_client.get(&url).bearer_auth(&self.token).send()
        })
        .await
    }

    async fn send_post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        let url = self.url(endpoint);
        debug!(method = "POST", %url, "sending request");

        send_with_retry(&self.retry, || {
            let request = self.http_client.post(&url).bearer_auth(&self.token);
            match body {
                Some(body) => request.json(body).send(),
                None => request.send(),
            }
        })
        .await
    }

    /// Decodes a successful response or converts a failure into our error types.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        endpoint: &str,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(parse_error_response(response, endpoint).await);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Handles responses that should have no body (e.g., 204 No Content).
    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
        endpoint: &str,
    ) -> Result<()> {
        if response.status().is_success() {
            return Ok(());
        }

        Err(parse_error_response(response, endpoint).await)
    }
}

impl fmt::Debug for TodoistClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoistClientBuilder")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl fmt::Debug for TodoistClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoistClient")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
