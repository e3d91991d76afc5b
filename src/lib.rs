//! textgate: a text-processing gateway with rule-based fallback.
//!
//! Forwards generation requests to a local inference backend ("local.ai")
//! and degrades to deterministic text transformations when that backend is
//! unreachable or erroring. Timeouts are surfaced rather than masked.

pub mod config;
pub mod dispatch;
pub mod fallback;
pub mod health;
pub mod http;
pub mod remote;

pub use config::GatewayConfig;
pub use dispatch::DispatchEngine;
pub use http::HttpServer;
