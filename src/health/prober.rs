//! On-demand availability probing.

use serde::{Deserialize, Serialize};

use crate::remote::RemoteClient;

/// Overall backend status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    Available,
    Fallback,
}

/// Which backend would serve requests right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    Remote,
    LocalFallback,
}

/// Availability report for the remote backend's capabilities.
///
/// All five capability flags mirror one underlying health boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityStatus {
    pub summarizer: bool,
    pub translator: bool,
    pub writer: bool,
    pub rewriter: bool,
    #[serde(rename = "languageModel")]
    pub language_model: bool,
    pub status: BackendStatus,
    pub backend: BackendKind,
}

impl AvailabilityStatus {
    pub fn from_health(available: bool) -> Self {
        Self {
            summarizer: available,
            translator: available,
            writer: available,
            rewriter: available,
            language_model: available,
            status: if available {
                BackendStatus::Available
            } else {
                BackendStatus::Fallback
            },
            backend: if available {
                BackendKind::Remote
            } else {
                BackendKind::LocalFallback
            },
        }
    }
}

/// Probes the remote backend on demand.
#[derive(Debug, Clone)]
pub struct AvailabilityProber {
    remote: RemoteClient,
}

impl AvailabilityProber {
    pub fn new(remote: RemoteClient) -> Self {
        Self { remote }
    }

    /// Re-probe the backend and report its availability.
    pub async fn check(&self) -> AvailabilityStatus {
        AvailabilityStatus::from_health(self.remote.probe().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_report_mirrors_boolean_everywhere() {
        let status = AvailabilityStatus::from_health(true);
        assert!(status.summarizer && status.translator && status.writer);
        assert!(status.rewriter && status.language_model);
        assert_eq!(status.status, BackendStatus::Available);
        assert_eq!(status.backend, BackendKind::Remote);
    }

    #[test]
    fn unhealthy_report_serializes_with_expected_labels() {
        let json = serde_json::to_value(AvailabilityStatus::from_health(false)).unwrap();
        assert_eq!(json["languageModel"], false);
        assert_eq!(json["status"], "fallback");
        assert_eq!(json["backend"], "local-fallback");
    }
}
