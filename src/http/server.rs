//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router with both endpoints
//! - Wire up middleware (trace, request timeout, request ID)
//! - Construct the dispatch engine and prober from validated config
//! - Serve with graceful shutdown

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::dispatch::DispatchEngine;
use crate::health::AvailabilityProber;
use crate::http::handlers;
use crate::http::request::{MakeUuidRequestId, X_REQUEST_ID};
use crate::remote::{RemoteClient, SetupError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DispatchEngine>,
    pub prober: Arc<AvailabilityProber>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from validated configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, SetupError> {
        let client = RemoteClient::new(&config.remote, &config.generation)?;

        let state = AppState {
            engine: Arc::new(DispatchEngine::new(client.clone())),
            prober: Arc::new(AvailabilityProber::new(client)),
        };

        let router = Router::new()
            .route("/api/models/generate", post(handlers::generate_text))
            .route("/api/models/check", get(handlers::check_availability))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::new(
                axum::http::HeaderName::from_static(X_REQUEST_ID),
            ))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(
                axum::http::HeaderName::from_static(X_REQUEST_ID),
                MakeUuidRequestId,
            ));

        Ok(Self { router })
    }

    /// Run the server until a Ctrl+C signal arrives.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run the server until the given future resolves.
    pub async fn run_until(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
