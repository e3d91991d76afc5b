//! Outbound calls to the remote inference backend.
//!
//! # Data Flow
//! ```text
//! DispatchEngine / AvailabilityProber
//!     → client.rs (bounded reqwest call)
//!     → outcome classification:
//!         200           → Generated(text)
//!         other status  → SoftFailure(status)
//!         connect error → Unavailable
//!         bound expiry  → Timeout
//!         anything else → Other
//! ```
//!
//! # Design Decisions
//! - Single attempt per call; bound expiry is terminal
//! - Connect errors are checked before timeout errors, so a connect
//!   timeout counts as "unreachable" (fallback), not as a hung request
//! - Transport classification lives here; fallback policy lives in dispatch

pub mod client;

pub use client::{GenerateOutcome, RemoteClient, RemoteError, SetupError};
