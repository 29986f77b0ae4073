//! Lead service - CRUD over leads and conversion into customers.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::customer::Customer;
use crate::models::lead::{CreateLeadRequest, Lead, UpdateLeadRequest};
use crate::repository::Repository;
use crate::store::JsonStore;

/// List all leads in document order.
pub async fn list(store: &Arc<JsonStore>) -> Result<Vec<Lead>, AppError> {
    Repository::<Lead>::new(store).list().await
}

/// Create a new lead.
pub async fn add(store: &Arc<JsonStore>, request: CreateLeadRequest) -> Result<Lead, AppError> {
    Repository::<Lead>::new(store)
        .insert(|id| Lead {
            id,
            name: request.name,
            company: request.company,
            title: request.title,
            email: request.email,
            phone: request.phone,
            address: request.address,
            source: request.source,
            status: request.status,
            added_date: request.added_date,
            last_contact: request.last_contact,
            industry: request.industry,
            annual_revenue: request.annual_revenue,
            notes: request.notes,
        })
        .await
}

/// Apply the fields present in the request to the matching lead.
///
/// Returns `None` when no lead matches; the caller decides how to surface
/// that (the edit endpoint treats it as a silent no-op).
pub async fn update(
    store: &Arc<JsonStore>,
    request: &UpdateLeadRequest,
) -> Result<Option<Lead>, AppError> {
    let fields = request.clone();

    Repository::<Lead>::new(store)
        .update(fields.id, move |lead| {
            if let Some(name) = fields.name {
                lead.name = name;
            }
            if let Some(company) = fields.company {
                lead.company = company;
            }
            if let Some(title) = fields.title {
                lead.title = title;
            }
            if let Some(email) = fields.email {
                lead.email = email;
            }
            if let Some(phone) = fields.phone {
                lead.phone = phone;
            }
            if let Some(address) = fields.address {
                lead.address = address;
            }
            if let Some(source) = fields.source {
                lead.source = source;
            }
            if let Some(status) = fields.status {
                lead.status = status;
            }
            if let Some(added_date) = fields.added_date {
                lead.added_date = added_date;
            }
            if let Some(last_contact) = fields.last_contact {
                lead.last_contact = last_contact;
            }
            if let Some(industry) = fields.industry {
                lead.industry = industry;
            }
            if let Some(annual_revenue) = fields.annual_revenue {
                lead.annual_revenue = annual_revenue;
            }
            if let Some(notes) = fields.notes {
                lead.notes = notes;
            }
        })
        .await
}

/// Delete a lead by id.
///
/// # Errors
///
/// `LeadNotFound` when no lead has that id.
pub async fn delete(store: &Arc<JsonStore>, lead_id: i64) -> Result<(), AppError> {
    if Repository::<Lead>::new(store).remove(lead_id).await? {
        Ok(())
    } else {
        Err(AppError::LeadNotFound)
    }
}

/// Convert a lead into a customer.
///
/// # Process
///
/// 1. Find the lead (fails with `LeadNotFound` if absent)
/// 2. Create a customer carrying over the lead's contact fields, with an
///    empty invoice history
/// 3. Mark the lead "won", using the id from step 1
///
/// The two documents are persisted one after the other; there is no
/// rollback of the new customer if marking the lead fails.
pub async fn convert_to_customer(
    store: &Arc<JsonStore>,
    lead_id: i64,
) -> Result<Customer, AppError> {
    let leads = Repository::<Lead>::new(store);
    let customers = Repository::<Customer>::new(store);

    let lead = leads
        .list()
        .await?
        .into_iter()
        .find(|lead| lead.id == lead_id)
        .ok_or(AppError::LeadNotFound)?;

    let customer = customers
        .insert(|id| Customer {
            id,
            name: lead.name.clone(),
            company: lead.company.clone(),
            title: lead.title.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            address: lead.address.clone(),
            trn: None,
            added_date: chrono::Utc::now().format("%B %d, %Y").to_string(),
            notes: format!("Converted from lead. Original notes: {}", lead.notes),
            total_invoices: 0,
            total_amount: 0.0,
            invoices: Vec::new(),
        })
        .await?;

    leads
        .update(lead_id, |lead| lead.status = "won".to_string())
        .await?;

    Ok(customer)
}
