//! Contact submission pipeline.

use std::sync::Arc;

use crate::domain::entities::ContactSubmission;
use crate::error::AppError;
use crate::infrastructure::mail::MailTransport;
use crate::infrastructure::verification::BotVerifier;
use serde_json::json;

/// Orchestrates a contact-form submission: bot verification first, then mail
/// dispatch.
///
/// The two steps are strictly sequenced. A rejected token short-circuits the
/// pipeline and the mail transport is never touched. There is no partial
/// success and no automatic retry; a failed submission is reported to the
/// caller, who may resubmit.
pub struct ContactService {
    verifier: Arc<dyn BotVerifier>,
    mailer: Arc<dyn MailTransport>,
}

impl ContactService {
    /// Creates a new contact service.
    pub fn new(verifier: Arc<dyn BotVerifier>, mailer: Arc<dyn MailTransport>) -> Self {
        Self { verifier, mailer }
    }

    /// Runs the submission pipeline for one form post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::VerificationFailed`] when the token is rejected or
    /// the verification service is unreachable (fail-closed, never
    /// distinguished), and [`AppError::DispatchFailed`] when the mail
    /// transport errors after a successful verification.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<(), AppError> {
        if !self.verifier.verify(&submission.turnstile_token).await {
            return Err(AppError::verification_failed(
                "Bot verification failed",
                json!({}),
            ));
        }

        let message = submission.into_message();

        self.mailer.send(&message).await.map_err(|e| {
            tracing::warn!("Mail dispatch failed: {}", e);
            AppError::dispatch_failed("Failed to send message", json!({}))
        })?;

        Ok(())
    }
}
