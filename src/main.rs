//! Business-Operations Backend - Main Application Entry Point
//!
//! This is a REST API server for a small business back office: leads,
//! customers, invoices, payments and a chart of accounts, with aggregated
//! dashboard metrics and a contact-form email relay.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: flat JSON documents, one per collection, rewritten whole
//! - **Email**: lettre over async SMTP (STARTTLS)
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Open the document store on the data directory
//! 3. Build the contact-form mailer (disabled without SMTP credentials)
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crm_web_server::services::email_service::Mailer;
use crm_web_server::store::JsonStore;
use crm_web_server::{AppState, build_router, config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Open the document store
    let store = Arc::new(JsonStore::new(&config.data_dir));
    tracing::info!("Document store rooted at {}", config.data_dir);

    // Build the mailer; it comes up disabled when SMTP is not configured
    let mailer = Arc::new(Mailer::from_config(&config)?);

    let state = AppState { store, mailer };
    let app = build_router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
