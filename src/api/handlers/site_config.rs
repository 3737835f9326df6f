//! Handler for the client configuration endpoint.

use axum::{Json, extract::State};

use crate::api::dto::site_config::SiteConfigResponse;
use crate::state::AppState;

/// Returns the public configuration the page needs to render the
/// Turnstile widget.
///
/// # Endpoint
///
/// `GET /api/config`
///
/// # Response
///
/// ```json
/// { "turnstile_site_key": "0x4AAA..." }
/// ```
pub async fn site_config_handler(State(state): State<AppState>) -> Json<SiteConfigResponse> {
    Json(SiteConfigResponse {
        turnstile_site_key: state.turnstile_site_key.clone(),
    })
}
