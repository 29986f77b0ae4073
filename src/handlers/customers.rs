//! Customer management HTTP handlers.
//!
//! - GET /api/customers - List customers
//! - POST /api/customers/add - Create new customer
//! - POST /api/customers/edit - Partial edit (id in body)
//! - DELETE /api/customers/:id/delete - Delete customer

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::AppState;
use crate::error::AppError;
use crate::models::customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
use crate::services::customer_service;

/// List all customers.
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = customer_service::list(&state.store).await?;

    Ok(Json(customers))
}

/// Create a new customer directly (without going through a lead).
///
/// # Response
///
/// - **Success (201 Created)**: the created customer, id assigned
pub async fn add_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let customer = customer_service::add(&state.store, request).await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Edit a customer.
///
/// Applies only the fields present in the payload; a missing id is a
/// silent no-op echoing the payload back.
pub async fn edit_customer(
    State(state): State<AppState>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Response, AppError> {
    match customer_service::update(&state.store, &request).await? {
        Some(customer) => Ok(Json(customer).into_response()),
        None => Ok(Json(request).into_response()),
    }
}

/// Delete a customer.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: no customer with that id
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    customer_service::delete(&state.store, customer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
