//! Cloudflare Turnstile verification client.

use super::service::BotVerifier;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Serialize)]
struct VerifyRequest<'a> {
    secret: &'a str,
    response: &'a str,
}

#[derive(Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Verifies Turnstile tokens against the Cloudflare siteverify endpoint.
///
/// Issues one POST per token with the shared secret and the token; the
/// endpoint's `success` boolean is the whole result. No retries, no caching.
/// The request is bounded by the timeout configured on the shared
/// [`reqwest::Client`].
pub struct TurnstileVerifier {
    client: reqwest::Client,
    verify_url: String,
    secret_key: String,
}

impl TurnstileVerifier {
    /// Creates a verifier for the given siteverify endpoint.
    ///
    /// The client is shared with other outbound callers; its timeout bounds
    /// every verification call.
    pub fn new(client: reqwest::Client, verify_url: String, secret_key: String) -> Self {
        Self {
            client,
            verify_url,
            secret_key,
        }
    }
}

#[async_trait]
impl BotVerifier for TurnstileVerifier {
    async fn verify(&self, token: &str) -> bool {
        let payload = VerifyRequest {
            secret: &self.secret_key,
            response: token,
        };

        let response = match self
            .client
            .post(&self.verify_url)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Turnstile request failed: {}", e);
                return false;
            }
        };

        if !response.status().is_success() {
            warn!("Turnstile returned HTTP {}", response.status());
            return false;
        }

        match response.json::<VerifyResponse>().await {
            Ok(body) => {
                if !body.success {
                    debug!("Turnstile rejected token: {:?}", body.error_codes);
                }
                body.success
            }
            Err(e) => {
                warn!("Turnstile response was not valid JSON: {}", e);
                false
            }
        }
    }
}
