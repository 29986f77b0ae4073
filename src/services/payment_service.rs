//! Payment service - payment CRUD and the mark-paid cascade.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::payment::{CreatePaymentRequest, Payment, UpdatePaymentRequest};
use crate::repository::Repository;
use crate::services::invoice_service;
use crate::store::JsonStore;

/// List all payments in document order.
pub async fn list(store: &Arc<JsonStore>) -> Result<Vec<Payment>, AppError> {
    Repository::<Payment>::new(store).list().await
}

/// Record a payment against an invoice.
///
/// # Process
///
/// 1. Append the payment to the payments document
/// 2. Best-effort: set the referenced invoice's status to "paid"
///
/// The cascade is unconditional - the amount is not reconciled against the
/// invoice total, and a payment against an id that matches no invoice still
/// succeeds. A failure in the second phase is logged; the recorded payment
/// is reported as the outcome either way.
pub async fn add(
    store: &Arc<JsonStore>,
    request: CreatePaymentRequest,
) -> Result<Payment, AppError> {
    let payment = Repository::<Payment>::new(store)
        .insert(|id| Payment {
            id,
            invoice_id: request.invoice_id,
            invoice_number: request.invoice_number,
            customer: request.customer,
            date: request.date,
            amount: request.amount,
            method: request.method,
            reference: request.reference,
        })
        .await?;

    if let Err(err) = invoice_service::set_status(store, payment.invoice_id, "paid").await {
        tracing::error!(
            "Failed to mark invoice {} paid after payment {}: {:?}",
            payment.invoice_id,
            payment.id,
            err
        );
    }

    Ok(payment)
}

/// Apply the fields present in the request to the matching payment.
///
/// Returns `None` when no payment matches. A plain merge: re-pointing
/// `invoice_id` does not re-run the mark-paid cascade.
pub async fn update(
    store: &Arc<JsonStore>,
    request: &UpdatePaymentRequest,
) -> Result<Option<Payment>, AppError> {
    let fields = request.clone();

    Repository::<Payment>::new(store)
        .update(fields.id, move |payment| {
            if let Some(invoice_id) = fields.invoice_id {
                payment.invoice_id = invoice_id;
            }
            if let Some(invoice_number) = fields.invoice_number {
                payment.invoice_number = Some(invoice_number);
            }
            if let Some(customer) = fields.customer {
                payment.customer = Some(customer);
            }
            if let Some(date) = fields.date {
                payment.date = Some(date);
            }
            if let Some(amount) = fields.amount {
                payment.amount = amount;
            }
            if let Some(method) = fields.method {
                payment.method = method;
            }
            if let Some(reference) = fields.reference {
                payment.reference = reference;
            }
        })
        .await
}

/// Delete a payment by id.
///
/// # Errors
///
/// `PaymentNotFound` when no payment has that id. The referenced invoice
/// keeps whatever status it has; deleting a payment does not un-pay it.
pub async fn delete(store: &Arc<JsonStore>, payment_id: i64) -> Result<(), AppError> {
    if Repository::<Payment>::new(store).remove(payment_id).await? {
        Ok(())
    } else {
        Err(AppError::PaymentNotFound)
    }
}
