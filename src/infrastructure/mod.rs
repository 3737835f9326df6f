//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and the two outbound
//! collaborators of the contact pipeline.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`verification`] - CAPTCHA token verification (Cloudflare Turnstile)
//! - [`mail`] - Notification email dispatch through a mail-provider HTTP API

pub mod mail;
pub mod persistence;
pub mod verification;
