//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Defaults mirror the behavior of running against a local.ai instance on
//! localhost with stock generation parameters.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, whole-request bound).
    pub listener: ListenerConfig,

    /// Remote inference backend (base URL, paths, call bounds).
    pub remote: RemoteConfig,

    /// Fixed generation parameters sent with every remote call.
    pub generation: GenerationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Whole-request timeout in seconds. Must exceed the remote call bound
    /// so the 504 classification happens in the dispatch layer, not here.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Remote inference backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the local.ai server.
    pub base_url: String,

    /// Path of the generation endpoint.
    pub generate_path: String,

    /// Path of the model-listing endpoint used by the availability probe.
    pub models_path: String,

    /// Bound for a generation call, in seconds. Expiry is terminal for the
    /// call and surfaced to the caller as 504; it never triggers fallback.
    pub request_timeout_secs: u64,

    /// Bound for an availability probe, in seconds.
    pub probe_timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            generate_path: "/api/generate".to_string(),
            models_path: "/api/models/".to_string(),
            request_timeout_secs: 30,
            probe_timeout_secs: 2,
        }
    }
}

/// Fixed generation parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Maximum output length requested from the backend.
    pub max_tokens: u32,

    /// Sampling temperature requested from the backend.
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
