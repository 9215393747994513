//! HTTP client for the external signup endpoint.
//!
//! [`SignupClient`] POSTs an assembled [`SignupPayload`] as a multipart form
//! to `{base}/api/signup`. Every failure mode (network, timeout, non-2xx) is
//! recoverable: callers keep their draft and may retry. [`SignupTransport`]
//! is the seam the wizard shell depends on, so tests can substitute an
//! in-memory transport.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::SubmitConfig;
use crate::payload::SignupPayload;

/// Path of the signup endpoint, relative to the configured base URL.
const SIGNUP_PATH: &str = "/api/signup";

/// Default per-request timeout. Expiry surfaces as a retryable error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for submission failures. All variants are retryable.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The HTTP request failed (network, DNS, timeout, malformed part).
    #[error("Signup request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The signup endpoint returned a non-2xx status code.
    #[error("Signup endpoint returned HTTP {0}")]
    HttpStatus(u16),
}

impl SubmitError {
    /// Whether the failure was a request timeout, so hosts can phrase
    /// retry guidance accordingly.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}

// ---------------------------------------------------------------------------
// Transport seam
// ---------------------------------------------------------------------------

/// The submission boundary consumed by the wizard shell.
#[async_trait]
pub trait SignupTransport: Send + Sync {
    /// Deliver one signup payload, returning the endpoint's JSON body on
    /// success.
    async fn submit(&self, payload: SignupPayload) -> Result<serde_json::Value, SubmitError>;
}

// ---------------------------------------------------------------------------
// SignupClient
// ---------------------------------------------------------------------------

/// Real HTTP transport for signup submission.
pub struct SignupClient {
    base_url: String,
    client: reqwest::Client,
}

impl SignupClient {
    /// Create a client for `base_url` with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a client from environment-derived configuration.
    pub fn from_config(config: &SubmitConfig) -> Self {
        Self::with_timeout(
            config.base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// The full signup endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}{SIGNUP_PATH}", self.base_url)
    }
}

#[async_trait]
impl SignupTransport for SignupClient {
    async fn submit(&self, payload: SignupPayload) -> Result<serde_json::Value, SubmitError> {
        let url = self.endpoint();
        let user_type = payload.user_type;
        let form = payload.into_form()?;

        tracing::info!(url = %url, user_type = user_type.as_str(), "Submitting signup");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                "Signup submission rejected by endpoint"
            );
            return Err(SubmitError::HttpStatus(status.as_u16()));
        }

        let body = response.json::<serde_json::Value>().await?;
        tracing::info!(user_type = user_type.as_str(), "Signup submission accepted");
        Ok(body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
