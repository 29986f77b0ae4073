//! Chart-of-accounts HTTP handlers.
//!
//! - GET /api/accounts - List chart of accounts
//! - POST /api/accounts/add - Add entry
//! - POST /api/accounts/:id/edit - Overwrite entry (404 when absent)
//! - DELETE /api/accounts/:id/delete - Delete entry

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::AppState;
use crate::error::AppError;
use crate::models::MessageResponse;
use crate::models::account::{Account, AccountRequest};
use crate::services::account_service;

/// List the chart of accounts.
///
/// A missing document reads as an empty chart. Entries stored without an
/// id get a positional one in the response.
pub async fn list_accounts(State(state): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = account_service::list(&state.store).await?;

    Ok(Json(accounts))
}

/// Add a chart-of-accounts entry.
///
/// # Request Body
///
/// ```json
/// {
///   "accountCode": "4000",
///   "accountName": "Sales Revenue",
///   "accountType": "Revenue",
///   "vatApplicable": true
/// }
/// ```
///
/// # Response
///
/// 201 Created with the entry; `vatApplicable` is stored as "Yes"/"No".
pub async fn add_account(
    State(state): State<AppState>,
    Json(request): Json<AccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    let account = account_service::add(&state.store, request).await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Overwrite a chart-of-accounts entry.
///
/// Unlike the other entities this is a full overwrite, and an unknown id
/// is a reported 404 rather than a silent no-op.
pub async fn edit_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
    Json(request): Json<AccountRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    account_service::update(&state.store, account_id, request).await?;

    Ok(Json(MessageResponse::new("Account updated successfully")))
}

/// Delete a chart-of-accounts entry.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: no entry with that id
pub async fn delete_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    account_service::delete(&state.store, account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
