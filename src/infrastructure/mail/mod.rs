//! Notification email dispatch.
//!
//! Provides a [`MailTransport`] trait with an HTTP mail-provider
//! implementation. One outbound email per call; there is no idempotency key,
//! so duplicate calls produce duplicate emails.

mod http_mailer;
mod service;

pub use http_mailer::HttpMailer;
pub use service::{MailError, MailTransport};

#[cfg(test)]
pub use service::MockMailTransport;
