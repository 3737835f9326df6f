//! Mail transport trait and error type.

use crate::domain::entities::ContactMessage;
use async_trait::async_trait;

/// Errors that can occur while handing a message to the mail provider.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail transport error: {0}")]
    Transport(String),
    #[error("Mail provider rejected the message: {0}")]
    Rejected(String),
}

/// Trait for delivering a contact notification email.
///
/// Implementations must be thread-safe. From/to addresses are fixed by
/// configuration; the caller only supplies the message fields.
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::HttpMailer`] - mail-provider HTTP API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Sends one notification email for the given message.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Transport`] when the provider is unreachable and
    /// [`MailError::Rejected`] when it refuses the message.
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}
