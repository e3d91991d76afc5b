//! HTTP client for the local.ai backend.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::{GenerationConfig, RemoteConfig};

/// Response fields probed for generated text, in priority order.
const RESPONSE_FIELDS: [&str; 3] = ["response", "text", "generated_text"];

/// Error constructing the client (bad URL or client build failure).
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid remote URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Transport-level failure of a generation call.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// A connection to the backend could not be established.
    #[error("cannot connect to local.ai: {0}")]
    Unavailable(String),

    /// The call bound expired after a connection was attempted.
    #[error("local.ai request timed out")]
    Timeout,

    /// Anything else (malformed body on a 200, body read failure, ...).
    #[error("{0}")]
    Other(String),
}

/// Outcome of a generation call that produced an HTTP response.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// 200 response; holds the normalized generated text (possibly empty).
    Generated(String),

    /// Any non-200 status.
    SoftFailure(StatusCode),
}

/// Client for the remote generation and model-listing endpoints.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: reqwest::Client,
    generate_url: Url,
    models_url: Url,
    request_timeout: Duration,
    probe_timeout: Duration,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct GeneratePayload<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

impl RemoteClient {
    /// Build a client from validated configuration.
    pub fn new(remote: &RemoteConfig, generation: &GenerationConfig) -> Result<Self, SetupError> {
        let base = Url::parse(&remote.base_url)?;

        // The backend is a localhost service; never route probes or
        // generation calls through an ambient HTTP proxy.
        let client = reqwest::Client::builder().no_proxy().build()?;

        Ok(Self {
            client,
            generate_url: base.join(&remote.generate_path)?,
            models_url: base.join(&remote.models_path)?,
            request_timeout: Duration::from_secs(remote.request_timeout_secs),
            probe_timeout: Duration::from_secs(remote.probe_timeout_secs),
            max_tokens: generation.max_tokens,
            temperature: generation.temperature,
        })
    }

    /// Send one bounded generation call.
    pub async fn generate(&self, prompt: &str) -> Result<GenerateOutcome, RemoteError> {
        let payload = GeneratePayload {
            prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.generate_url.clone())
            .json(&payload)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if response.status() == StatusCode::OK {
            let body: Value = response
                .json()
                .await
                .map_err(classify_transport_error)?;
            Ok(GenerateOutcome::Generated(extract_generated_text(&body)))
        } else {
            Ok(GenerateOutcome::SoftFailure(response.status()))
        }
    }

    /// Send one bounded probe to the model-listing endpoint.
    ///
    /// Returns true iff the backend answered 200 within the probe bound.
    pub async fn probe(&self) -> bool {
        match self
            .client
            .get(self.models_url.clone())
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(response) => {
                let available = response.status() == StatusCode::OK;
                if !available {
                    tracing::debug!(
                        status = %response.status(),
                        "availability probe returned non-success status"
                    );
                }
                available
            }
            Err(err) => {
                tracing::debug!(error = %err, "availability probe failed");
                false
            }
        }
    }
}

/// Map a reqwest error onto the failure taxonomy.
///
/// Ordering matters: a connect timeout reports both `is_connect` and
/// `is_timeout`, and must land in `Unavailable`.
fn classify_transport_error(err: reqwest::Error) -> RemoteError {
    if err.is_connect() {
        RemoteError::Unavailable(err.to_string())
    } else if err.is_timeout() {
        RemoteError::Timeout
    } else {
        RemoteError::Other(err.to_string())
    }
}

/// Pick the first non-empty of `response`, `text`, `generated_text`.
fn extract_generated_text(body: &Value) -> String {
    RESPONSE_FIELDS
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_owned)
        .unwrap_or_default()
}
