//! Chart-of-accounts service.
//!
//! The chart behaves slightly differently from the operational entities:
//! a missing document reads as an empty chart, hand-maintained documents
//! may lack ids (backfilled positionally on read), and edits overwrite
//! every field and report not-found instead of silently doing nothing.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::account::{Account, AccountRequest};
use crate::repository::Repository;
use crate::store::JsonStore;

/// List the chart of accounts.
///
/// Records loaded without an id get a positional, 1-based one in the
/// response only; the document is not rewritten.
pub async fn list(store: &Arc<JsonStore>) -> Result<Vec<Account>, AppError> {
    let mut accounts = Repository::<Account>::new(store).list().await?;

    for (index, account) in accounts.iter_mut().enumerate() {
        if account.id == 0 {
            account.id = (index + 1) as i64;
        }
    }

    Ok(accounts)
}

/// Add a chart-of-accounts entry.
pub async fn add(store: &Arc<JsonStore>, request: AccountRequest) -> Result<Account, AppError> {
    let vat_applicable = request.vat_applicable_label();

    Repository::<Account>::new(store)
        .insert(|id| Account {
            id,
            account_code: request.account_code,
            account_name: request.account_name,
            account_type: request.account_type,
            description: request.description,
            vat_applicable,
        })
        .await
}

/// Overwrite every field of the matching entry with the request values.
///
/// # Errors
///
/// `AccountNotFound` when no entry has that id.
pub async fn update(
    store: &Arc<JsonStore>,
    account_id: i64,
    request: AccountRequest,
) -> Result<Account, AppError> {
    let vat_applicable = request.vat_applicable_label();

    Repository::<Account>::new(store)
        .update(account_id, move |account| {
            account.account_code = request.account_code;
            account.account_name = request.account_name;
            account.account_type = request.account_type;
            account.description = request.description;
            account.vat_applicable = vat_applicable;
        })
        .await?
        .ok_or(AppError::AccountNotFound)
}

/// Delete a chart-of-accounts entry by id.
///
/// # Errors
///
/// `AccountNotFound` when no entry has that id.
pub async fn delete(store: &Arc<JsonStore>, account_id: i64) -> Result<(), AppError> {
    if Repository::<Account>::new(store).remove(account_id).await? {
        Ok(())
    } else {
        Err(AppError::AccountNotFound)
    }
}
