//! API route configuration.
//!
//! All endpoints are public; the site has no accounts.

use crate::api::handlers::{contact_handler, site_config_handler, visit_count_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /contact`     - Contact-form relay (bot check + email)
/// - `POST /visit-count` - Bump and return the visit counter
/// - `GET  /config`      - Public widget configuration for the page
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact_handler))
        .route("/visit-count", post(visit_count_handler))
        .route("/config", get(site_config_handler))
}
