//! Failures surfaced to the caller.
//!
//! Unreachable and soft-failing remotes are recovered via fallback and never
//! appear here; the user-visible failure surface is deliberately narrow.

use thiserror::Error;

/// Locally-fatal processing failures.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No usable text in either `prompt` or `input`.
    #[error("No text provided. Please provide \"prompt\" or \"input\" field.")]
    InvalidRequest,

    /// The remote call bound expired. Surfaced, never masked by fallback,
    /// so a hung remote process stays visible.
    #[error("local.ai request timed out")]
    RemoteTimeout,

    /// Any other unexpected failure, with the underlying message.
    #[error("Processing failed: {0}")]
    Internal(String),
}
