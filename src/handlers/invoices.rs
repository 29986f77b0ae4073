//! Invoice management HTTP handlers.
//!
//! - GET /api/invoices - List invoices
//! - POST /api/invoices/add - Create invoice (customer cascade)
//! - POST /api/invoices/add-custom - Create ad-hoc invoice
//! - POST /api/invoices/edit - Partial edit (id in body)
//! - DELETE /api/invoices/:id/delete - Delete invoice
//! - POST /api/invoices/:id/mark-sent - Status transition
//! - POST /api/invoices/:id/mark-paid - Status transition
//! - GET /api/invoices/summary - Sales/receivables/cash totals

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::AppState;
use crate::error::AppError;
use crate::models::MessageResponse;
use crate::models::dashboard::InvoiceSummary;
use crate::models::invoice::{
    AddCustomInvoiceRequest, AddInvoiceRequest, Invoice, UpdateInvoiceRequest,
};
use crate::services::{dashboard_service, invoice_service};

/// List all invoices.
pub async fn list_invoices(State(state): State<AppState>) -> Result<Json<Vec<Invoice>>, AppError> {
    let invoices = invoice_service::list(&state.store).await?;

    Ok(Json(invoices))
}

/// Create an invoice, optionally linked to an existing customer.
///
/// # Request Body
///
/// ```json
/// {
///   "customer_id": 3,
///   "date": "2026-08-07",
///   "due_date": "2026-09-06",
///   "items": [],
///   "subtotal": 500,
///   "vat": 25,
///   "total": 525
/// }
/// ```
///
/// # Response
///
/// 201 Created with the invoice. When a customer is linked, its invoice
/// history and cached totals are updated after the invoice is persisted;
/// a failure there is logged and does not fail this request.
pub async fn add_invoice(
    State(state): State<AppState>,
    Json(request): Json<AddInvoiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = invoice_service::add(&state.store, request).await?;

    Ok((StatusCode::CREATED, Json(invoice)))
}

/// Create a custom (ad-hoc) invoice with embedded contact details.
///
/// By default also creates a brand-new customer from those details
/// (`add_as_customer: false` opts out).
pub async fn add_custom_invoice(
    State(state): State<AppState>,
    Json(request): Json<AddCustomInvoiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = invoice_service::add_custom(&state.store, request).await?;

    Ok((StatusCode::CREATED, Json(invoice)))
}

/// Edit an invoice.
///
/// Applies only the fields present in the payload; a missing id is a
/// silent no-op echoing the payload back. Does not touch any customer's
/// cached history.
pub async fn edit_invoice(
    State(state): State<AppState>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<Response, AppError> {
    match invoice_service::update(&state.store, &request).await? {
        Some(invoice) => Ok(Json(invoice).into_response()),
        None => Ok(Json(request).into_response()),
    }
}

/// Delete an invoice.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: no invoice with that id
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    invoice_service::delete(&state.store, invoice_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark an invoice as sent.
///
/// Fire-and-forget from the frontend's list view: an unknown id is a
/// no-op and still acknowledged.
pub async fn mark_invoice_sent(
    State(state): State<AppState>,
    Path(invoice_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    invoice_service::set_status(&state.store, invoice_id, "sent").await?;

    Ok(Json(MessageResponse::new("Invoice marked as sent")))
}

/// Mark an invoice as paid.
pub async fn mark_invoice_paid(
    State(state): State<AppState>,
    Path(invoice_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    invoice_service::set_status(&state.store, invoice_id, "paid").await?;

    Ok(Json(MessageResponse::new("Invoice marked as paid")))
}

/// Sales, receivables and cash-collected totals over all invoices.
///
/// # Response
///
/// ```json
/// {
///   "totalSales": 150.0,
///   "totalReceivables": 50.0,
///   "totalCashCollected": 100.0
/// }
/// ```
pub async fn invoice_summary(
    State(state): State<AppState>,
) -> Result<Json<InvoiceSummary>, AppError> {
    let invoices = invoice_service::list(&state.store).await?;

    Ok(Json(dashboard_service::invoice_summary(&invoices)))
}
