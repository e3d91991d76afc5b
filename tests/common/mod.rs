//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use textgate::config::GatewayConfig;
use textgate::http::HttpServer;

/// Start a stub remote backend whose every request runs `respond`.
/// Returns the bound address and a hit counter.
pub async fn start_remote_stub<F, Fut>(respond: F) -> (SocketAddr, Arc<AtomicU32>)
where
    F: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = (StatusCode, String)> + Send + 'static,
{
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();

    let app = Router::new().fallback(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        respond()
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, hits)
}

/// Start a stub that always answers the same status and body.
pub async fn start_fixed_stub(
    status: StatusCode,
    body: &'static str,
) -> (SocketAddr, Arc<AtomicU32>) {
    start_remote_stub(move || async move { (status, body.to_string()) }).await
}

/// A localhost address nothing is listening on.
pub fn unreachable_addr() -> SocketAddr {
    // Bind an ephemeral port, then release it immediately.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Default gateway config pointed at the given remote address.
pub fn gateway_config(remote_addr: SocketAddr) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.remote.base_url = format!("http://{remote_addr}");
    config
}

/// Spawn a gateway; returns its address and a shutdown handle.
pub async fn spawn_gateway(config: GatewayConfig) -> (SocketAddr, oneshot::Sender<()>) {
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(&config).unwrap();

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        server
            .run_until(listener, async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    (addr, shutdown_tx)
}

/// Client that never picks up an ambient proxy.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
