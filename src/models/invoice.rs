//! Invoice data models and API request types.
//!
//! This module defines:
//! - `Invoice`: a billing document stored in `invoices.json`
//! - `CustomDetails`: embedded contact details for ad-hoc invoices
//! - `CustomerRef`: the customer reference a create request may carry
//! - Request types for adding, adding custom, and editing invoices

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::repository::Entity;

/// A billing document, optionally tied to a customer.
///
/// # Document
///
/// Stored in `invoices.json` under the `invoices` key.
///
/// # Numbering
///
/// `number` is `INV-%04d` (or `INV-CUST-%04d` for custom invoices) derived
/// from the collection length at creation time, not from the id. Numbers
/// stay unique only while invoices are never deleted; that is the historical
/// contract of the documents and is preserved as-is.
///
/// # Lifecycle
///
/// `status` moves draft → sent → paid. Recording a payment forces it to
/// "paid" without reconciling amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier, assigned sequentially on insert
    pub id: i64,

    /// Display number, e.g. "INV-0007"
    pub number: String,

    /// Human-readable customer label, "{company} - {name}"
    #[serde(default)]
    pub customer: String,

    /// Link to the customer record; null for ad-hoc invoices and for
    /// references that matched no customer. Never validated on read.
    #[serde(default)]
    pub customer_id: Option<i64>,

    #[serde(default)]
    pub customer_company: String,

    /// Contact details embedded in custom invoices; omitted otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_details: Option<CustomDetails>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default, rename = "dueDate")]
    pub due_date: Option<String>,

    /// "draft", "sent" or "paid"
    #[serde(default = "default_status")]
    pub status: String,

    /// Line items, passed through untouched; the backend never inspects them
    #[serde(default)]
    pub items: Vec<Value>,

    #[serde(default)]
    pub subtotal: f64,

    #[serde(default)]
    pub vat: f64,

    #[serde(default)]
    pub total: f64,
}

fn default_status() -> String {
    "draft".to_string()
}

impl Entity for Invoice {
    const DOCUMENT: &'static str = "invoices";
    const COLLECTION_KEY: &'static str = "invoices";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Contact details embedded in a custom (ad-hoc) invoice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDetails {
    #[serde(default)]
    pub company_name: String,

    #[serde(default)]
    pub contact_person: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub address: String,

    /// Tax registration number
    #[serde(default)]
    pub trn_number: String,
}

/// Customer reference carried by an invoice create request.
///
/// The frontend sends either a numeric customer id or the literal string
/// `"custom"`; any string form means "no customer".
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CustomerRef {
    Id(i64),
    Sentinel(String),
}

impl CustomerRef {
    /// Numeric id, if this reference carries one.
    pub fn as_id(&self) -> Option<i64> {
        match self {
            CustomerRef::Id(id) => Some(*id),
            CustomerRef::Sentinel(_) => None,
        }
    }
}

/// Request body for creating an invoice against an existing customer.
///
/// # JSON Example
///
/// ```json
/// {
///   "customer_id": 3,
///   "date": "2026-08-07",
///   "due_date": "2026-09-06",
///   "items": [{"description": "Consulting", "amount": 500}],
///   "subtotal": 500,
///   "vat": 25,
///   "total": 525
/// }
/// ```
///
/// `customer_id` may also be the string "custom", which behaves like no
/// customer at all. `dueDate` is accepted as an alias for `due_date`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddInvoiceRequest {
    #[serde(default)]
    pub customer_id: Option<CustomerRef>,

    /// Fallback label when no customer record is found
    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub customer_company: String,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default, alias = "dueDate")]
    pub due_date: Option<String>,

    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default)]
    pub items: Vec<Value>,

    #[serde(default)]
    pub subtotal: f64,

    #[serde(default)]
    pub vat: f64,

    #[serde(default)]
    pub total: f64,
}

/// Request body for creating a custom (ad-hoc) invoice.
///
/// The contact details are embedded in the invoice itself; when
/// `add_as_customer` is true (the default, the "Save Customer" flow) a
/// brand-new customer record is also created from them. No attempt is made
/// to find an equivalent existing customer.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddCustomInvoiceRequest {
    #[serde(default)]
    pub custom_details: CustomDetails,

    #[serde(default = "default_true")]
    pub add_as_customer: bool,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default, alias = "dueDate")]
    pub due_date: Option<String>,

    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default)]
    pub items: Vec<Value>,

    #[serde(default)]
    pub subtotal: f64,

    #[serde(default)]
    pub vat: f64,

    #[serde(default)]
    pub total: f64,
}

fn default_true() -> bool {
    true
}

/// Request body for editing an invoice.
///
/// Only the fields below can be edited; the customer link and number are
/// fixed at creation. Editing an id that does not exist is a no-op and the
/// payload is echoed back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateInvoiceRequest {
    /// Id of the invoice to edit
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}
