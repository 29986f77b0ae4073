//! Invoice service - invoice CRUD, numbering, and the customer-history
//! cascade.
//!
//! Creating an invoice against a customer is a two-phase write: the invoice
//! document is saved first, then the customer's invoice history and cached
//! totals are updated best-effort. A failure in the second phase is logged
//! and does not undo or fail the first; the invoice's existence is the
//! primary fact, the customer cache is derived data.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::customer::{Customer, CustomerInvoice};
use crate::models::invoice::{
    AddCustomInvoiceRequest, AddInvoiceRequest, Invoice, UpdateInvoiceRequest,
};
use crate::repository::Repository;
use crate::store::JsonStore;

/// List all invoices in document order.
pub async fn list(store: &Arc<JsonStore>) -> Result<Vec<Invoice>, AppError> {
    Repository::<Invoice>::new(store).list().await
}

/// Create an invoice, optionally linked to a customer.
///
/// # Process
///
/// 1. Resolve the customer reference: a numeric id is looked up to build
///    the "{company} - {name}" label; the "custom" sentinel and references
///    matching no customer leave the invoice unlinked (`customer_id` null)
/// 2. Assign the next id and the display number `INV-%04d` from the
///    collection length, append, persist
/// 3. Best-effort: append a summary entry to the linked customer's history
///    and recompute its cached totals
///
/// The display number comes from the count at creation time, not the id,
/// so numbers repeat if invoices were ever deleted. That matches what the
/// existing documents contain.
pub async fn add(store: &Arc<JsonStore>, request: AddInvoiceRequest) -> Result<Invoice, AppError> {
    let invoices = Repository::<Invoice>::new(store);

    let requested_id = request.customer_id.as_ref().and_then(|r| r.as_id());

    let mut customer_label = request.customer_name.clone();
    let mut customer_company = request.customer_company.clone();
    let mut customer_id = None;

    if let Some(id) = requested_id {
        match Repository::<Customer>::new(store).list().await {
            Ok(customers) => {
                if let Some(customer) = customers.iter().find(|c| c.id == id) {
                    customer_label = format!("{} - {}", customer.company, customer.name);
                    customer_company = customer.company.clone();
                    customer_id = Some(id);
                }
            }
            Err(err) => {
                tracing::warn!("Failed to look up customer {} for invoice label: {}", id, err);
            }
        }
    }

    let invoice = invoices
        .mutate(move |items| {
            let invoice = Invoice {
                id: Repository::<Invoice>::next_id(items),
                number: format!("INV-{:04}", items.len() + 1),
                customer: customer_label,
                customer_id,
                customer_company,
                custom_details: None,
                date: request.date,
                due_date: request.due_date,
                status: request.status,
                items: request.items,
                subtotal: request.subtotal,
                vat: request.vat,
                total: request.total,
            };
            items.push(invoice.clone());
            invoice
        })
        .await?;

    // Second phase: customer history cascade, best-effort
    if let Some(id) = customer_id {
        if let Err(err) = append_customer_history(store, id, &invoice).await {
            tracing::error!("Failed to update customer {} invoice history: {:?}", id, err);
        }
    }

    Ok(invoice)
}

/// Create a custom (ad-hoc) invoice with embedded contact details.
///
/// Numbered `INV-CUST-%04d`, never linked to an existing customer. When
/// `add_as_customer` is set, a brand-new customer record is created from
/// the embedded details (best-effort, like the history cascade) with this
/// invoice as its entire history - even if an equivalent customer already
/// exists.
pub async fn add_custom(
    store: &Arc<JsonStore>,
    request: AddCustomInvoiceRequest,
) -> Result<Invoice, AppError> {
    let invoices = Repository::<Invoice>::new(store);

    let AddCustomInvoiceRequest {
        custom_details,
        add_as_customer,
        date,
        due_date,
        status,
        items: line_items,
        subtotal,
        vat,
        total,
    } = request;

    let customer_label = format!(
        "{} - {}",
        custom_details.company_name, custom_details.contact_person
    );
    let company = custom_details.company_name.clone();

    let invoice = invoices
        .mutate(move |items| {
            let invoice = Invoice {
                id: Repository::<Invoice>::next_id(items),
                number: format!("INV-CUST-{:04}", items.len() + 1),
                customer: customer_label,
                customer_id: None,
                customer_company: company,
                custom_details: Some(custom_details),
                date,
                due_date,
                status,
                items: line_items,
                subtotal,
                vat,
                total,
            };
            items.push(invoice.clone());
            invoice
        })
        .await?;

    if add_as_customer {
        if let Err(err) = add_invoice_customer(store, &invoice).await {
            tracing::error!("Failed to create customer from custom invoice: {:?}", err);
        }
    }

    Ok(invoice)
}

/// Apply the fields present in the request to the matching invoice.
///
/// Returns `None` when no invoice matches. The customer link and number
/// are not editable.
pub async fn update(
    store: &Arc<JsonStore>,
    request: &UpdateInvoiceRequest,
) -> Result<Option<Invoice>, AppError> {
    let fields = request.clone();

    Repository::<Invoice>::new(store)
        .update(fields.id, move |invoice| {
            if let Some(customer) = fields.customer {
                invoice.customer = customer;
            }
            if let Some(date) = fields.date {
                invoice.date = Some(date);
            }
            if let Some(due_date) = fields.due_date {
                invoice.due_date = Some(due_date);
            }
            if let Some(status) = fields.status {
                invoice.status = status;
            }
            if let Some(items) = fields.items {
                invoice.items = items;
            }
            if let Some(subtotal) = fields.subtotal {
                invoice.subtotal = subtotal;
            }
            if let Some(vat) = fields.vat {
                invoice.vat = vat;
            }
            if let Some(total) = fields.total {
                invoice.total = total;
            }
        })
        .await
}

/// Delete an invoice by id.
///
/// # Errors
///
/// `InvoiceNotFound` when no invoice has that id. Customer history entries
/// referencing the invoice number are left as they are.
pub async fn delete(store: &Arc<JsonStore>, invoice_id: i64) -> Result<(), AppError> {
    if Repository::<Invoice>::new(store).remove(invoice_id).await? {
        Ok(())
    } else {
        Err(AppError::InvoiceNotFound)
    }
}

/// Set an invoice's status.
///
/// A missing id is a silent no-op: the frontend fires these transitions
/// from list views and treats the acknowledgement as fire-and-forget.
pub async fn set_status(
    store: &Arc<JsonStore>,
    invoice_id: i64,
    status: &str,
) -> Result<(), AppError> {
    let status = status.to_string();

    Repository::<Invoice>::new(store)
        .update(invoice_id, move |invoice| invoice.status = status)
        .await?;

    Ok(())
}

/// Append an invoice summary to a customer's history and recompute the
/// cached totals from the resulting list.
async fn append_customer_history(
    store: &Arc<JsonStore>,
    customer_id: i64,
    invoice: &Invoice,
) -> Result<(), AppError> {
    let entry = summary_entry(invoice);

    Repository::<Customer>::new(store)
        .update(customer_id, move |customer| {
            customer.invoices.push(entry);
            customer.total_invoices = customer.invoices.len() as i64;
            customer.total_amount = customer.invoices.iter().map(|inv| inv.amount).sum();
        })
        .await?;

    Ok(())
}

/// Create a customer record from the contact details embedded in a custom
/// invoice, seeded with that invoice as its entire history.
async fn add_invoice_customer(store: &Arc<JsonStore>, invoice: &Invoice) -> Result<(), AppError> {
    let details = invoice.custom_details.clone().unwrap_or_default();
    let entry = summary_entry(invoice);
    let total = invoice.total;

    Repository::<Customer>::new(store)
        .insert(move |id| Customer {
            id,
            name: details.contact_person,
            company: details.company_name,
            title: details.title,
            email: details.email,
            phone: details.phone,
            address: details.address,
            trn: Some(details.trn_number),
            added_date: chrono::Utc::now().format("%B %d, %Y").to_string(),
            notes: "Added from custom invoice".to_string(),
            total_invoices: 1,
            total_amount: total,
            invoices: vec![entry],
        })
        .await?;

    Ok(())
}

fn summary_entry(invoice: &Invoice) -> CustomerInvoice {
    CustomerInvoice {
        number: invoice.number.clone(),
        date: invoice.date.clone(),
        amount: invoice.total,
        status: invoice.status.clone(),
    }
}
