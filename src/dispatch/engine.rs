//! The dispatch engine.

use crate::dispatch::error::DispatchError;
use crate::dispatch::types::{GenerateRequest, ProcessingResult};
use crate::fallback::transform;
use crate::remote::{GenerateOutcome, RemoteClient, RemoteError};

const FALLBACK_NOTE: &str = "Using fallback processing";
const FALLBACK_WARNING: &str = "local.ai not available, using fallback processing";

/// Routes a request to the remote backend or the fallback transformer.
#[derive(Debug, Clone)]
pub struct DispatchEngine {
    remote: RemoteClient,
}

impl DispatchEngine {
    pub fn new(remote: RemoteClient) -> Self {
        Self { remote }
    }

    /// Process one request.
    ///
    /// Fails only on malformed input, a remote timeout, or a genuinely
    /// unexpected error; every other remote failure degrades into a
    /// fallback-produced result.
    pub async fn process(
        &self,
        request: &GenerateRequest,
    ) -> Result<ProcessingResult, DispatchError> {
        let text = request
            .effective_text()
            .ok_or(DispatchError::InvalidRequest)?;

        match self.remote.generate(text).await {
            Ok(GenerateOutcome::Generated(result)) => Ok(ProcessingResult::clean(result)),
            Ok(GenerateOutcome::SoftFailure(status)) => {
                tracing::info!(
                    status = %status,
                    "local.ai returned non-success status, using fallback"
                );
                Ok(ProcessingResult::with_note(transform(text), FALLBACK_NOTE))
            }
            Err(RemoteError::Unavailable(reason)) => {
                tracing::warn!(
                    reason = %reason,
                    "cannot connect to local.ai, using fallback processing"
                );
                Ok(ProcessingResult::with_warning(
                    transform(text),
                    FALLBACK_WARNING,
                ))
            }
            Err(RemoteError::Timeout) => Err(DispatchError::RemoteTimeout),
            Err(RemoteError::Other(message)) => Err(DispatchError::Internal(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GenerationConfig, RemoteConfig};

    fn engine_for(base_url: &str) -> DispatchEngine {
        let remote = RemoteConfig {
            base_url: base_url.to_string(),
            ..RemoteConfig::default()
        };
        let client = RemoteClient::new(&remote, &GenerationConfig::default()).unwrap();
        DispatchEngine::new(client)
    }

    #[tokio::test]
    async fn invalid_request_fails_before_any_remote_call() {
        // A base URL no client could ever reach; validation must short-circuit
        // before the transport layer is touched.
        let engine = engine_for("http://127.0.0.1:1");
        let err = engine.process(&GenerateRequest::default()).await.unwrap_err();
        assert!(matches!(err, DispatchError::InvalidRequest));
    }

    #[tokio::test]
    async fn unreachable_backend_yields_fallback_with_warning() {
        let engine = engine_for("http://127.0.0.1:1");
        let request = GenerateRequest {
            prompt: Some(vec!["Summarize: A. B. C. D.".into()]),
            input: None,
        };
        let result = engine.process(&request).await.unwrap();
        assert_eq!(result.result, "A. C. D.");
        assert_eq!(result.warning.as_deref(), Some(FALLBACK_WARNING));
        assert_eq!(result.note, None);
    }
}
