//! Mail-provider HTTP API client.

use super::service::{MailError, MailTransport};
use crate::domain::entities::ContactMessage;
use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    text: String,
}

/// Delivers contact notifications through a mail-provider JSON API.
///
/// One POST per message with a bearer token; from/to addresses are fixed at
/// construction from configuration. Submitting structured JSON rather than
/// raw message text keeps user-controlled fields out of header positions.
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_token: String,
    from: String,
    to: String,
}

impl HttpMailer {
    /// Creates a mailer for the given provider endpoint.
    ///
    /// The client is shared with other outbound callers; its timeout bounds
    /// every send.
    pub fn new(
        client: reqwest::Client,
        api_url: String,
        api_token: String,
        from: String,
        to: String,
    ) -> Self {
        Self {
            client,
            api_url,
            api_token,
            from,
            to,
        }
    }
}

#[async_trait]
impl MailTransport for HttpMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let payload = SendRequest {
            from: &self.from,
            to: &self.to,
            subject: message.subject(),
            text: message.body(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected(format!("HTTP {}: {}", status, detail)));
        }

        info!("Contact notification dispatched to {}", self.to);
        Ok(())
    }
}
