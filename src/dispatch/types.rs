//! Request and result shapes for the dispatch engine.

use serde::{Deserialize, Serialize};

/// Inbound generation request body.
///
/// The effective text prefers the first element of a list-typed `prompt`
/// when present and non-empty, else `input`. Only the first prompt element
/// is used; the rest are silently ignored (no batching contract exists).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<Vec<String>>,

    #[serde(default)]
    pub input: Option<String>,
}

impl GenerateRequest {
    /// The text to process, or None when the request is invalid.
    pub fn effective_text(&self) -> Option<&str> {
        if let Some(first) = self.prompt.as_ref().and_then(|p| p.first()) {
            if !first.is_empty() {
                return Some(first);
            }
        }
        match self.input.as_deref() {
            Some(input) if !input.is_empty() => Some(input),
            _ => None,
        }
    }
}

/// Outbound generation result.
///
/// Exactly one of {neither, note, warning} is set depending on the path
/// taken: remote success sets neither, a remote soft failure sets `note`,
/// an unreachable remote sets `warning`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub result: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ProcessingResult {
    pub fn clean(result: String) -> Self {
        Self {
            result,
            note: None,
            warning: None,
        }
    }

    pub fn with_note(result: String, note: &str) -> Self {
        Self {
            result,
            note: Some(note.to_string()),
            warning: None,
        }
    }

    pub fn with_warning(result: String, warning: &str) -> Self {
        Self {
            result,
            note: None,
            warning: Some(warning.to_string()),
        }
    }
}
