//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::application::controller::{LoadPhase, ViewState};
use crate::state::AppState;

/// Returns service health based on the last committed hotel list load.
///
/// Does not contact the upstream services itself.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: No load yet, or the last load succeeded
/// - **503 Service Unavailable**: The last load failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "last_load": {
///       "status": "ok",
///       "message": "Loaded 3 hotel(s) (mount 7)"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let view = state.controller.current().await;
    let last_load = check_last_load(&view, state.controller.generation());

    let healthy = last_load.status != "error";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { last_load },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_last_load(view: &ViewState, generation: u64) -> CheckStatus {
    match view.phase {
        LoadPhase::Pending => CheckStatus {
            status: "pending".to_string(),
            message: Some("No hotel list loaded yet".to_string()),
        },
        LoadPhase::Loaded => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Loaded {} hotel(s) (mount {})",
                view.hotels.len(),
                generation
            )),
        },
        LoadPhase::Errored => CheckStatus {
            status: "error".to_string(),
            message: view.error.clone(),
        },
    }
}
