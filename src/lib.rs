//! Business-operations backend: leads, customers, invoices, payments and a
//! chart of accounts persisted as flat JSON documents, with aggregated
//! dashboard reads and a contact-form email endpoint.
//!
//! The library half of the crate exists so integration tests can build the
//! router and drive the services directly; the binary in `main.rs` only
//! wires configuration and serves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::email_service::Mailer;
use crate::store::JsonStore;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// JSON document store holding all collections
    pub store: Arc<JsonStore>,

    /// Contact-form mailer (possibly disabled)
    pub mailer: Arc<Mailer>,
}

/// Build the full HTTP router over the given state.
///
/// # Routes
///
/// One CRUD group per entity, the invoice status transitions and summary,
/// the combined dashboard read, the contact form, and a health check. The
/// frontend is served separately, so CORS is wide open here.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Public liveness probe
        .route("/health", get(handlers::health::health_check))
        // Lead routes
        .route("/api/leads", get(handlers::leads::list_leads))
        .route("/api/leads/add", post(handlers::leads::add_lead))
        .route("/api/leads/edit", post(handlers::leads::edit_lead))
        .route(
            "/api/leads/{lead_id}/convert",
            post(handlers::leads::convert_lead),
        )
        .route(
            "/api/leads/{lead_id}/delete",
            delete(handlers::leads::delete_lead),
        )
        // Customer routes
        .route("/api/customers", get(handlers::customers::list_customers))
        .route(
            "/api/customers/add",
            post(handlers::customers::add_customer),
        )
        .route(
            "/api/customers/edit",
            post(handlers::customers::edit_customer),
        )
        .route(
            "/api/customers/{customer_id}/delete",
            delete(handlers::customers::delete_customer),
        )
        // Invoice routes
        .route("/api/invoices", get(handlers::invoices::list_invoices))
        .route("/api/invoices/add", post(handlers::invoices::add_invoice))
        .route(
            "/api/invoices/add-custom",
            post(handlers::invoices::add_custom_invoice),
        )
        .route("/api/invoices/edit", post(handlers::invoices::edit_invoice))
        .route(
            "/api/invoices/{invoice_id}/delete",
            delete(handlers::invoices::delete_invoice),
        )
        .route(
            "/api/invoices/{invoice_id}/mark-sent",
            post(handlers::invoices::mark_invoice_sent),
        )
        .route(
            "/api/invoices/{invoice_id}/mark-paid",
            post(handlers::invoices::mark_invoice_paid),
        )
        .route(
            "/api/invoices/summary",
            get(handlers::invoices::invoice_summary),
        )
        // Payment routes
        .route("/api/payments", get(handlers::payments::list_payments))
        .route("/api/payments/add", post(handlers::payments::add_payment))
        .route("/api/payments/edit", post(handlers::payments::edit_payment))
        .route(
            "/api/payments/{payment_id}/delete",
            delete(handlers::payments::delete_payment),
        )
        // Chart-of-accounts routes
        .route("/api/accounts", get(handlers::accounts::list_accounts))
        .route("/api/accounts/add", post(handlers::accounts::add_account))
        .route(
            "/api/accounts/{account_id}/edit",
            post(handlers::accounts::edit_account),
        )
        .route(
            "/api/accounts/{account_id}/delete",
            delete(handlers::accounts::delete_account),
        )
        // Aggregated dashboard read
        .route(
            "/api/dashboard/metrics",
            get(handlers::dashboard::dashboard_metrics),
        )
        // Contact form
        .route("/submit-form", post(handlers::contact::submit_form))
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // The frontend runs on its own origin
        .layer(CorsLayer::permissive())
        // Share state with all handlers via State extraction
        .with_state(state)
}
