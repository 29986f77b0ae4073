//! Payment management HTTP handlers.
//!
//! - GET /api/payments - List payments
//! - POST /api/payments/add - Record payment (marks the invoice paid)
//! - POST /api/payments/edit - Partial edit (id in body)
//! - DELETE /api/payments/:id/delete - Delete payment

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::AppState;
use crate::error::AppError;
use crate::models::payment::{CreatePaymentRequest, Payment, UpdatePaymentRequest};
use crate::services::payment_service;

/// List all payments.
pub async fn list_payments(State(state): State<AppState>) -> Result<Json<Vec<Payment>>, AppError> {
    let payments = payment_service::list(&state.store).await?;

    Ok(Json(payments))
}

/// Record a payment against an invoice.
///
/// # Request Body
///
/// ```json
/// {
///   "invoice_id": 12,
///   "amount": 525.0,
///   "method": "bank_transfer",
///   "reference": "TRX-4471"
/// }
/// ```
///
/// # Response
///
/// 201 Created with the payment. The referenced invoice is marked paid
/// afterwards; a failure there is logged and does not fail this request.
pub async fn add_payment(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payment = payment_service::add(&state.store, request).await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

/// Edit a payment.
///
/// Applies only the fields present in the payload; a missing id is a
/// silent no-op echoing the payload back.
pub async fn edit_payment(
    State(state): State<AppState>,
    Json(request): Json<UpdatePaymentRequest>,
) -> Result<Response, AppError> {
    match payment_service::update(&state.store, &request).await? {
        Some(payment) => Ok(Json(payment).into_response()),
        None => Ok(Json(request).into_response()),
    }
}

/// Delete a payment.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: no payment with that id
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    payment_service::delete(&state.store, payment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
