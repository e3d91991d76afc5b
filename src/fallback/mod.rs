//! Rule-based fallback processing.
//!
//! Used whenever the remote inference backend cannot serve a request. The
//! transformer is a pure function with no failure modes: any input yields
//! some output, so every fallback path succeeds.

pub mod transformer;

pub use transformer::{extract_content_after_colon, transform};
