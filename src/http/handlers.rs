//! Endpoint handlers.
//!
//! # Responsibilities
//! - Deserialize inbound bodies
//! - Delegate to the dispatch engine and availability prober
//! - Map `DispatchError` onto HTTP statuses and the `{error}` body shape

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::dispatch::{DispatchError, GenerateRequest, ProcessingResult};
use crate::health::AvailabilityStatus;
use crate::http::server::AppState;

/// POST /api/models/generate
pub async fn generate_text(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<ProcessingResult>, DispatchError> {
    state.engine.process(&request).await.map(Json)
}

/// GET /api/models/check
///
/// Always answers 200; unavailability is data, not an error.
pub async fn check_availability(State(state): State<AppState>) -> Json<AvailabilityStatus> {
    Json(state.prober.check().await)
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let status = match &self {
            DispatchError::InvalidRequest => StatusCode::BAD_REQUEST,
            DispatchError::RemoteTimeout => StatusCode::GATEWAY_TIMEOUT,
            DispatchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
