//! CAPTCHA token verification.
//!
//! Provides a [`BotVerifier`] trait with a Cloudflare Turnstile
//! implementation. Verification is fail-closed: any transport problem counts
//! as a failed check.

mod service;
mod turnstile;

pub use service::BotVerifier;
pub use turnstile::TurnstileVerifier;

#[cfg(test)]
pub use service::MockBotVerifier;
