//! DTO for the visit-count endpoint.

use serde::Serialize;

/// Post-increment counter value returned on every page view.
#[derive(Debug, Serialize)]
pub struct VisitCountResponse {
    pub count: i64,
}
