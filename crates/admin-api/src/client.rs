//! HTTP client for the back-office REST API
//!
//! This module implements the request/response types, error handling with
//! transient-error classification, retry with exponential backoff, and the
//! theme endpoints used by the admin editor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

use theme_core::theme::Theme;

// =============================================================================
// Error Types
// =============================================================================

/// Error returned by API endpoints
///
/// Covers both transport failures (status 0) and application-level errors
/// reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("API error {status}: {code} - {message}")]
pub struct ApiError {
    /// HTTP status code; 0 when the request never produced a response
    status: u16,
    /// Machine-readable error code (e.g. "InvalidRequest", "NotFound")
    code: String,
    /// Human-readable error message
    message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { status, code: code.into(), message: message.into() }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a transient network-side failure worth retrying
    pub fn is_network_error(&self) -> bool {
        matches!(
            self.status,
            0 | 408 | 425 | 429 | 500 | 502 | 503 | 504 | 522 | 524
        )
    }
}

/// Standard error response body from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorBody {
    error: String,
    message: String,
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the back-office API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Headers included in every request (e.g. an auth token)
    pub default_headers: HashMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("SignageStudio/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }
}

impl ApiConfig {
    /// Create a config with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Default::default() }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// Retry with Exponential Backoff
// =============================================================================

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: usize,
    /// Initial delay between retries
    pub initial_delay: Duration,
    /// Maximum delay between retries
    pub max_delay: Duration,
    /// Backoff multiplier
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Create a retry configuration with a retry budget
    pub fn new(max_retries: usize) -> Self {
        Self { max_retries, ..Default::default() }
    }

    /// Set the initial delay
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let delay_ms = self.initial_delay.as_millis() as f64
            * self.backoff_multiplier.powi(attempt as i32);
        Duration::from_millis(delay_ms as u64).min(self.max_delay)
    }
}

/// Retry an async operation under a retry policy
///
/// `should_retry` decides which errors are worth another attempt; anything
/// else is returned immediately.
pub async fn retry<F, Fut, T, E>(
    config: RetryConfig,
    should_retry: impl Fn(&E) -> bool,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempts = 0;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(err) => {
                attempts += 1;
                if !should_retry(&err) || attempts > config.max_retries {
                    return Err(err);
                }
                sleep(config.delay_for_attempt(attempts - 1)).await;
            }
        }
    }
}

/// Retry an operation on transient network errors only
pub async fn network_retry<F, Fut, T>(max_retries: usize, operation: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let config = RetryConfig::new(max_retries);
    retry(config, |err: &ApiError| err.is_network_error(), operation).await
}

// =============================================================================
// API Client
// =============================================================================

/// Path of the theme resource on the back-office API
const THEME_PATH: &str = "/api/admin/theme";

/// Typed client for the back-office REST API
///
/// # Examples
/// ```no_run
/// use admin_api::{ApiClient, ApiConfig};
///
/// async fn example() -> Result<(), admin_api::ApiError> {
///     let client = ApiClient::new(ApiConfig::new("https://api.example.com"));
///     let theme = client.fetch_theme().await?;
///     client.save_theme(&theme).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the currently applied site theme
    pub async fn fetch_theme(&self) -> Result<Theme, ApiError> {
        self.get_json(THEME_PATH).await
    }

    /// Fetch the theme, retrying transient failures
    pub async fn fetch_theme_with_retry(&self, max_retries: usize) -> Result<Theme, ApiError> {
        network_retry(max_retries, || self.fetch_theme()).await
    }

    /// Persist a theme as the site's applied theme
    ///
    /// Not retried automatically: the editor keeps its draft on failure and
    /// the admin decides when to try again.
    pub async fn save_theme(&self, theme: &Theme) -> Result<(), ApiError> {
        self.put_json(THEME_PATH, theme).await
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = self.request(reqwest::Method::GET, path);
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::new(0, "NetworkError", format!("Request failed: {}", e)))?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::new(0, "ParseError", format!("Failed to parse JSON: {}", e)))
    }

    async fn put_json<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize,
    {
        let request = self.request(reqwest::Method::PUT, path).json(body);
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::new(0, "NetworkError", format!("Request failed: {}", e)))?;
        let response = Self::check_status(response).await?;

        tracing::debug!(status = response.status().as_u16(), path, "request succeeded");
        Ok(())
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self.client.request(method, url);
        for (key, value) in &self.config.default_headers {
            request = request.header(key, value);
        }
        request
    }

    /// Turn a non-2xx response into an `ApiError`, decoding the standard
    /// error body when the backend sent one
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(err) => Err(ApiError::new(status, err.error, err.message)),
            Err(_) => Err(ApiError::new(status, "Unknown", format!("HTTP {}: {}", status, body))),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_transient() {
        let error = ApiError::new(503, "ServiceUnavailable", "Backend is down");
        assert_eq!(error.status(), 503);
        assert_eq!(error.code(), "ServiceUnavailable");
        assert!(error.is_network_error());

        // Transport failures carry status 0.
        assert!(ApiError::new(0, "NetworkError", "connection refused").is_network_error());
    }

    #[test]
    fn test_api_error_application() {
        let error = ApiError::new(400, "InvalidRequest", "Bad theme payload");
        assert!(!error.is_network_error());

        let error = ApiError::new(404, "NotFound", "No theme configured");
        assert!(!error.is_network_error());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(404, "NotFound", "No theme configured");
        let display = error.to_string();
        assert!(display.contains("404"));
        assert!(display.contains("NotFound"));
        assert!(display.contains("No theme configured"));
    }

    #[test]
    fn test_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("SignageStudio/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ApiConfig::new("https://api.example.com")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("CustomAgent/1.0")
            .with_header("Authorization", "Bearer token");

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "CustomAgent/1.0");
        assert_eq!(
            config.default_headers.get("Authorization"),
            Some(&"Bearer token".to_string())
        );
    }

    #[test]
    fn test_retry_config_delays() {
        let config = RetryConfig::new(3)
            .with_initial_delay(Duration::from_millis(100))
            .with_max_delay(Duration::from_secs(1));

        assert_eq!(config.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(config.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(config.delay_for_attempt(2), Duration::from_millis(400));
        // Capped past the max.
        assert_eq!(config.delay_for_attempt(10), Duration::from_secs(1));
    }

    #[test]
    fn test_client_construction() {
        let client = ApiClient::new(ApiConfig::new("https://api.example.com"));
        assert_eq!(client.config().base_url, "https://api.example.com");
    }
}
