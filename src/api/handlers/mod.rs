//! HTTP request handlers for API endpoints.

pub mod contact;
pub mod health;
pub mod site_config;
pub mod visit_count;

pub use contact::contact_handler;
pub use health::health_handler;
pub use site_config::site_config_handler;
pub use visit_count::visit_count_handler;
