use std::sync::Arc;

use crate::application::services::{ContactService, VisitService};
use crate::infrastructure::persistence::PgCounterRepository;

/// Shared application state injected into all handlers.
///
/// Everything here is cheap to clone and safe to share across concurrent
/// requests; the only mutable state in the system is the counter row inside
/// PostgreSQL.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService>,
    pub visit_service: Arc<VisitService<PgCounterRepository>>,
    /// Public Turnstile widget key served to the page via `/api/config`.
    pub turnstile_site_key: Option<String>,
}
