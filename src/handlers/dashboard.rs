//! Combined dashboard read across leads, customers and invoices.

use axum::{Json, extract::State};

use crate::AppState;
use crate::error::AppError;
use crate::models::dashboard::DashboardResponse;
use crate::services::{customer_service, dashboard_service, invoice_service, lead_service};

/// Dashboard metrics handler.
///
/// # Endpoint
///
/// `GET /api/dashboard/metrics`
///
/// Loads all three collections and aggregates them in one pass; nothing is
/// mutated. The shape mirrors what the dashboard page binds to: headline
/// metrics, trend placeholders, the four most recent leads and unpaid
/// invoices, quick stats and chart series.
pub async fn dashboard_metrics(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let leads = lead_service::list(&state.store).await?;
    let customers = customer_service::list(&state.store).await?;
    let invoices = invoice_service::list(&state.store).await?;

    Ok(Json(dashboard_service::dashboard_metrics(
        &leads, &customers, &invoices,
    )))
}
