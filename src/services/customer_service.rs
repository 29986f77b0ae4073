//! Customer service - CRUD over customer records.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
use crate::repository::Repository;
use crate::store::JsonStore;

/// List all customers in document order.
pub async fn list(store: &Arc<JsonStore>) -> Result<Vec<Customer>, AppError> {
    Repository::<Customer>::new(store).list().await
}

/// Create a new customer directly.
///
/// The invoice history fields may be seeded by the caller; they default to
/// an empty history.
pub async fn add(
    store: &Arc<JsonStore>,
    request: CreateCustomerRequest,
) -> Result<Customer, AppError> {
    Repository::<Customer>::new(store)
        .insert(|id| Customer {
            id,
            name: request.name,
            company: request.company,
            title: request.title,
            email: request.email,
            phone: request.phone,
            address: request.address,
            trn: None,
            added_date: request.added_date,
            notes: request.notes,
            total_invoices: request.total_invoices,
            total_amount: request.total_amount,
            invoices: request.invoices,
        })
        .await
}

/// Apply the fields present in the request to the matching customer.
///
/// Returns `None` when no customer matches. The derived invoice caches are
/// written as given; only the invoice-add path recomputes them.
pub async fn update(
    store: &Arc<JsonStore>,
    request: &UpdateCustomerRequest,
) -> Result<Option<Customer>, AppError> {
    let fields = request.clone();

    Repository::<Customer>::new(store)
        .update(fields.id, move |customer| {
            if let Some(name) = fields.name {
                customer.name = name;
            }
            if let Some(company) = fields.company {
                customer.company = company;
            }
            if let Some(title) = fields.title {
                customer.title = title;
            }
            if let Some(email) = fields.email {
                customer.email = email;
            }
            if let Some(phone) = fields.phone {
                customer.phone = phone;
            }
            if let Some(address) = fields.address {
                customer.address = address;
            }
            if let Some(trn) = fields.trn {
                customer.trn = Some(trn);
            }
            if let Some(added_date) = fields.added_date {
                customer.added_date = added_date;
            }
            if let Some(notes) = fields.notes {
                customer.notes = notes;
            }
            if let Some(total_invoices) = fields.total_invoices {
                customer.total_invoices = total_invoices;
            }
            if let Some(total_amount) = fields.total_amount {
                customer.total_amount = total_amount;
            }
            if let Some(invoices) = fields.invoices {
                customer.invoices = invoices;
            }
        })
        .await
}

/// Delete a customer by id.
///
/// # Errors
///
/// `CustomerNotFound` when no customer has that id. Invoices pointing at
/// the deleted customer keep their `customer_id`; the link is never
/// validated.
pub async fn delete(store: &Arc<JsonStore>, customer_id: i64) -> Result<(), AppError> {
    if Repository::<Customer>::new(store).remove(customer_id).await? {
        Ok(())
    } else {
        Err(AppError::CustomerNotFound)
    }
}
