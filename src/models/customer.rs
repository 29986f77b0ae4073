//! Customer data models and API request types.
//!
//! This module defines:
//! - `Customer`: a client record stored in `customers.json`
//! - `CustomerInvoice`: the per-customer invoice summary entries
//! - `CreateCustomerRequest` / `UpdateCustomerRequest`: request bodies

use serde::{Deserialize, Serialize};

use crate::repository::Entity;

/// A converted or directly-created client record.
///
/// # Document
///
/// Stored in `customers.json` under the `customers` key.
///
/// # Derived Caches
///
/// `totalInvoices` and `totalAmount` are caches over the `invoices` list.
/// They are recomputed whenever an invoice is added for this customer;
/// direct edits can set them to anything, so only the invoice-add path
/// keeps them consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier, assigned sequentially on insert
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub address: String,

    /// Tax registration number; only present on customers created from a
    /// custom invoice, so it is omitted from the document when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trn: Option<String>,

    #[serde(default)]
    pub added_date: String,

    #[serde(default)]
    pub notes: String,

    /// Cached count of `invoices`
    #[serde(default)]
    pub total_invoices: i64,

    /// Cached sum of `invoices[].amount`
    #[serde(default)]
    pub total_amount: f64,

    /// Summaries of the invoices issued to this customer, in issue order
    #[serde(default)]
    pub invoices: Vec<CustomerInvoice>,
}

impl Entity for Customer {
    const DOCUMENT: &'static str = "customers";
    const COLLECTION_KEY: &'static str = "customers";

    fn id(&self) -> i64 {
        self.id
    }
}

/// One entry of a customer's invoice history.
///
/// A trimmed-down view of an invoice: enough for the customer page without
/// loading the invoices document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInvoice {
    pub number: String,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub amount: f64,

    #[serde(default)]
    pub status: String,
}

/// Request body for creating a customer directly (not via lead conversion).
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "John Doe",
///   "company": "Globex",
///   "email": "john@globex.example",
///   "addedDate": "August 07, 2026"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCustomerRequest {
    pub name: String,

    pub company: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub added_date: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub total_invoices: i64,

    #[serde(default)]
    pub total_amount: f64,

    #[serde(default)]
    pub invoices: Vec<CustomerInvoice>,
}

/// Request body for editing a customer.
///
/// Only the fields present in the payload are applied. Editing an id that
/// does not exist is a no-op and the payload is echoed back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCustomerRequest {
    /// Id of the customer to edit
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_invoices: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoices: Option<Vec<CustomerInvoice>>,
}
