//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, temperature bounds)
//! - Check the listener bound leaves room for the remote call bound
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address is not a valid socket address: {0}")]
    InvalidBindAddress(String),

    #[error("remote.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),

    #[error("{0} must start with '/'")]
    PathNotRooted(&'static str),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("listener.request_timeout_secs must exceed remote.request_timeout_secs")]
    ListenerBoundTooTight,

    #[error("generation.max_tokens must be greater than zero")]
    ZeroMaxTokens,

    #[error("generation.temperature must be within 0.0..=2.0")]
    TemperatureOutOfRange,
}

/// Validate semantic constraints, collecting every violation.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if Url::parse(&config.remote.base_url).is_err() {
        errors.push(ValidationError::InvalidBaseUrl(
            config.remote.base_url.clone(),
        ));
    }

    if !config.remote.generate_path.starts_with('/') {
        errors.push(ValidationError::PathNotRooted("remote.generate_path"));
    }
    if !config.remote.models_path.starts_with('/') {
        errors.push(ValidationError::PathNotRooted("remote.models_path"));
    }

    if config.remote.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("remote.request_timeout_secs"));
    }
    if config.remote.probe_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("remote.probe_timeout_secs"));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout(
            "listener.request_timeout_secs",
        ));
    }

    if config.listener.request_timeout_secs <= config.remote.request_timeout_secs {
        errors.push(ValidationError::ListenerBoundTooTight);
    }

    if config.generation.max_tokens == 0 {
        errors.push(ValidationError::ZeroMaxTokens);
    }
    if !(0.0..=2.0).contains(&config.generation.temperature) {
        errors.push(ValidationError::TemperatureOutOfRange);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
