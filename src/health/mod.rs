//! Backend availability probing.
//!
//! # Design Decisions
//! - Health is never cached: each check re-probes the backend
//! - Every probe failure collapses uniformly to "unavailable"; the failure
//!   kind is logged at debug level but the public shape stays a boolean
//! - All capability flags mirror one health boolean; the capabilities
//!   share a single backend today

pub mod prober;

pub use prober::{AvailabilityProber, AvailabilityStatus, BackendKind, BackendStatus};
