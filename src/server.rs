//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, outbound client setup, and Axum server lifecycle.

use crate::application::services::{ContactService, VisitService};
use crate::config::Config;
use crate::infrastructure::mail::HttpMailer;
use crate::infrastructure::persistence::PgCounterRepository;
use crate::infrastructure::verification::TurnstileVerifier;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Shared outbound HTTP client (Turnstile + mail provider)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The outbound HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    // One client for both outbound calls; its timeout is the bound the
    // contact pipeline relies on before treating a call as failed.
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.outbound_timeout_seconds))
        .build()
        .context("Failed to build outbound HTTP client")?;

    let verifier = Arc::new(TurnstileVerifier::new(
        http_client.clone(),
        config.turnstile_verify_url.clone(),
        config.turnstile_secret_key.clone(),
    ));
    let mailer = Arc::new(HttpMailer::new(
        http_client,
        config.mail_api_url.clone(),
        config.mail_api_token.clone(),
        config.email_from.clone(),
        config.email_to.clone(),
    ));

    let counter_repository = Arc::new(PgCounterRepository::new(Arc::new(pool)));

    let state = AppState {
        contact_service: Arc::new(ContactService::new(verifier, mailer)),
        visit_service: Arc::new(VisitService::new(counter_repository)),
        turnstile_site_key: config.turnstile_site_key.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
