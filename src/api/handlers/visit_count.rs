//! Handler for the visit counter endpoint.

use axum::{Json, extract::State};

use crate::api::dto::visit::VisitCountResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Bumps the visit counter and returns the new value.
///
/// # Endpoint
///
/// `POST /api/visit-count`
///
/// No request body. Every call increments; the first call on a fresh store
/// creates the counter with `count = 1`.
///
/// # Response
///
/// ```json
/// { "count": 1024 }
/// ```
///
/// # Errors
///
/// Returns 500 on storage errors. The page treats that as "no count to show"
/// and renders without one.
pub async fn visit_count_handler(
    State(state): State<AppState>,
) -> Result<Json<VisitCountResponse>, AppError> {
    let count = state.visit_service.increment().await?;

    Ok(Json(VisitCountResponse { count }))
}
