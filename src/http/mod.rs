//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware layers)
//!     → request.rs (request ID generation)
//!     → handlers.rs (deserialize, call dispatch/health, map errors)
//!     → JSON response
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{MakeUuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
