#![allow(dead_code)]

use async_trait::async_trait;
use portfolio_backend::application::services::{ContactService, VisitService};
use portfolio_backend::domain::entities::ContactMessage;
use portfolio_backend::infrastructure::mail::{MailError, MailTransport};
use portfolio_backend::infrastructure::persistence::PgCounterRepository;
use portfolio_backend::infrastructure::verification::BotVerifier;
use portfolio_backend::state::AppState;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

/// Verifier stub with a fixed outcome.
pub struct StubVerifier {
    pub outcome: bool,
}

#[async_trait]
impl BotVerifier for StubVerifier {
    async fn verify(&self, _token: &str) -> bool {
        self.outcome
    }
}

/// Mail transport that records what it was asked to send.
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ContactMessage>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent_messages(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Transport("stub transport down".to_string()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Builds an [`AppState`] over the test database with the given contact
/// pipeline collaborators.
pub fn create_test_state(
    pool: PgPool,
    verifier: Arc<dyn BotVerifier>,
    mailer: Arc<dyn MailTransport>,
) -> AppState {
    let counter_repo = Arc::new(PgCounterRepository::new(Arc::new(pool)));

    AppState {
        contact_service: Arc::new(ContactService::new(verifier, mailer)),
        visit_service: Arc::new(VisitService::new(counter_repo)),
        turnstile_site_key: Some("test-site-key".to_string()),
    }
}

/// State for tests that never touch the contact pipeline.
pub fn create_counter_state(pool: PgPool) -> AppState {
    create_test_state(
        pool,
        Arc::new(StubVerifier { outcome: true }),
        Arc::new(RecordingMailer::new()),
    )
}

/// Reads the stored count directly, bypassing the repository.
pub async fn read_count(pool: &PgPool) -> Option<i64> {
    sqlx::query_scalar::<_, i64>("SELECT count FROM visit_counts WHERE id = 1")
        .fetch_optional(pool)
        .await
        .unwrap()
}
