mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use common::{RecordingMailer, StubVerifier};
use portfolio_backend::api::handlers::contact_handler;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

fn contact_app(pool: PgPool, verifier: StubVerifier, mailer: Arc<RecordingMailer>) -> Router {
    let state = common::create_test_state(pool, Arc::new(verifier), mailer);
    Router::new()
        .route("/api/contact", post(contact_handler))
        .with_state(state)
}

fn valid_payload() -> serde_json::Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "I love the projects section!",
        "turnstile_token": "tok-abc"
    })
}

#[sqlx::test]
async fn test_contact_success_sends_one_email(pool: PgPool) {
    let mailer = Arc::new(RecordingMailer::new());
    let app = contact_app(pool, StubVerifier { outcome: true }, mailer.clone());
    let server = TestServer::new(app).unwrap();

    let response = server.post("/api/contact").json(&valid_payload()).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);

    let sent = mailer.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Ada");
    assert_eq!(sent[0].email, "ada@example.com");
    assert_eq!(sent[0].message, "I love the projects section!");
}

#[sqlx::test]
async fn test_contact_rejected_token_never_dispatches(pool: PgPool) {
    let mailer = Arc::new(RecordingMailer::new());
    let app = contact_app(pool, StubVerifier { outcome: false }, mailer.clone());
    let server = TestServer::new(app).unwrap();

    let response = server.post("/api/contact").json(&valid_payload()).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "verification_failed");

    assert!(mailer.sent_messages().is_empty());
}

#[sqlx::test]
async fn test_contact_transport_error_is_dispatch_failure(pool: PgPool) {
    let mailer = Arc::new(RecordingMailer::failing());
    let app = contact_app(pool, StubVerifier { outcome: true }, mailer.clone());
    let server = TestServer::new(app).unwrap();

    let response = server.post("/api/contact").json(&valid_payload()).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "dispatch_failed");
}

#[sqlx::test]
async fn test_contact_invalid_email_rejected_before_pipeline(pool: PgPool) {
    let mailer = Arc::new(RecordingMailer::new());
    let app = contact_app(pool, StubVerifier { outcome: true }, mailer.clone());
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Ada",
            "email": "not-an-email",
            "message": "hi",
            "turnstile_token": "tok-abc"
        }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    assert!(mailer.sent_messages().is_empty());
}

#[sqlx::test]
async fn test_contact_missing_token_rejected(pool: PgPool) {
    let mailer = Arc::new(RecordingMailer::new());
    let app = contact_app(pool, StubVerifier { outcome: true }, mailer.clone());
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "hi",
            "turnstile_token": ""
        }))
        .await;

    response.assert_status_bad_request();
    assert!(mailer.sent_messages().is_empty());
}
