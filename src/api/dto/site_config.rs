//! DTO for the client configuration endpoint.

use serde::Serialize;

/// Configuration the statically served page needs at runtime.
#[derive(Debug, Serialize)]
pub struct SiteConfigResponse {
    /// Public Turnstile widget key; `null` when the widget is not configured.
    pub turnstile_site_key: Option<String>,
}
