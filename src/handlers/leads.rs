//! Lead management HTTP handlers.
//!
//! This module implements the lead-related API endpoints:
//! - GET /api/leads - List leads
//! - POST /api/leads/add - Create new lead
//! - POST /api/leads/edit - Partial edit (id in body)
//! - POST /api/leads/:id/convert - Convert a lead into a customer
//! - DELETE /api/leads/:id/delete - Delete lead

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::AppState;
use crate::error::AppError;
use crate::models::lead::{CreateLeadRequest, Lead, UpdateLeadRequest};
use crate::services::lead_service;

/// List all leads.
///
/// # Response
///
/// 200 OK with the leads in document order (may be empty).
pub async fn list_leads(State(state): State<AppState>) -> Result<Json<Vec<Lead>>, AppError> {
    let leads = lead_service::list(&state.store).await?;

    Ok(Json(leads))
}

/// Create a new lead.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jane Smith",
///   "company": "Acme LLC",
///   "email": "jane@acme.example"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created lead, id assigned
/// - **Error (500)**: storage error
pub async fn add_lead(
    State(state): State<AppState>,
    Json(request): Json<CreateLeadRequest>,
) -> Result<impl IntoResponse, AppError> {
    let lead = lead_service::add(&state.store, request).await?;

    Ok((StatusCode::CREATED, Json(lead)))
}

/// Edit a lead.
///
/// Applies only the fields present in the payload. Editing an id that does
/// not exist is a silent no-op: the payload is echoed back unchanged, the
/// way list-driven frontends expect.
pub async fn edit_lead(
    State(state): State<AppState>,
    Json(request): Json<UpdateLeadRequest>,
) -> Result<Response, AppError> {
    match lead_service::update(&state.store, &request).await? {
        Some(lead) => Ok(Json(lead).into_response()),
        None => Ok(Json(request).into_response()),
    }
}

/// Convert a lead into a customer.
///
/// # Response
///
/// - **Success (201 Created)**: the new customer record; the lead is kept
///   with its status set to "won"
/// - **Error (404)**: no lead with that id
pub async fn convert_lead(
    State(state): State<AppState>,
    Path(lead_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let customer = lead_service::convert_to_customer(&state.store, lead_id).await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Delete a lead.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: no lead with that id
pub async fn delete_lead(
    State(state): State<AppState>,
    Path(lead_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    lead_service::delete(&state.store, lead_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
