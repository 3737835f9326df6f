//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: reads the visit counter row (a missing row on a fresh
///    database is healthy; only query errors degrade the status)
///
/// The outbound collaborators (Turnstile, mail provider) are not probed:
/// both are pay-per-call services and their failures already degrade
/// per-request with fail-closed semantics.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": {
///       "status": "ok",
///       "message": "Connected, visit count: 1024"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let all_healthy = db_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database: db_check },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by reading the counter row.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.visit_service.current().await {
        Ok(Some(counter)) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, visit count: {}", counter.count)),
        },
        Ok(None) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Connected, no visits counted yet".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {:?}", e)),
        },
    }
}
