//! Dispatch-and-fallback decision engine.
//!
//! # Data Flow
//! ```text
//! GenerateRequest
//!     → types.rs (effective-text extraction)
//!     → engine.rs (remote call via remote::client)
//!     → on 200:            normalized result
//!       on other status:   fallback + note
//!       on unreachable:    fallback + warning
//!       on bound expiry:   RemoteTimeout (surfaced, never masked)
//!       on anything else:  Internal (surfaced with the message)
//! ```
//!
//! # Design Decisions
//! - Invalid input is the only locally-fatal error
//! - A hung remote process stays visible: timeouts do not fall back

pub mod engine;
pub mod error;
pub mod types;

pub use engine::DispatchEngine;
pub use error::DispatchError;
pub use types::{GenerateRequest, ProcessingResult};
