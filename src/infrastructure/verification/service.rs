//! Bot-verification trait.

use async_trait::async_trait;

/// Trait for validating a browser-supplied anti-bot token.
///
/// Implementations must be thread-safe and fail closed: a transport error,
/// timeout, or malformed response is reported as `false`, indistinguishable
/// from a rejected token. Tokens are single-use by contract of the external
/// service, so implementations must not cache results.
///
/// # Implementations
///
/// - [`crate::infrastructure::verification::TurnstileVerifier`] - Cloudflare Turnstile siteverify
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BotVerifier: Send + Sync {
    /// Checks a token against the external verification service.
    ///
    /// Returns `true` only when the service explicitly confirms the token.
    async fn verify(&self, token: &str) -> bool;
}
