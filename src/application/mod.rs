//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository and
//! outbound-client calls. Services consume traits and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::contact_service::ContactService`] - contact submission pipeline
//! - [`services::visit_service::VisitService`] - visit counter

pub mod services;
