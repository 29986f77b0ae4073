//! Payment data models and API request types.

use serde::{Deserialize, Serialize};

use crate::repository::Entity;

/// A record of funds received against an invoice.
///
/// # Document
///
/// Stored in `payments.json` under the `payments` key.
///
/// # Side Effect
///
/// Recording a payment marks the referenced invoice as paid. The amount is
/// not reconciled against the invoice total; a partial payment still flips
/// the status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier, assigned sequentially on insert
    pub id: i64,

    /// Invoice this payment settles
    pub invoice_id: i64,

    /// Display number of the invoice, denormalized for listings
    #[serde(default)]
    pub invoice_number: Option<String>,

    /// Customer label, denormalized for listings
    #[serde(default)]
    pub customer: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub amount: f64,

    /// "bank_transfer", "cash", "cheque", ...
    #[serde(default = "default_method")]
    pub method: String,

    /// Bank or cheque reference
    #[serde(default)]
    pub reference: String,
}

fn default_method() -> String {
    "bank_transfer".to_string()
}

impl Entity for Payment {
    const DOCUMENT: &'static str = "payments";
    const COLLECTION_KEY: &'static str = "payments";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Request body for recording a payment.
///
/// # JSON Example
///
/// ```json
/// {
///   "invoice_id": 12,
///   "invoice_number": "INV-0012",
///   "customer": "Acme LLC - Jane Smith",
///   "date": "2026-08-07",
///   "amount": 525.0,
///   "method": "bank_transfer",
///   "reference": "TRX-4471"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePaymentRequest {
    pub invoice_id: i64,

    #[serde(default)]
    pub invoice_number: Option<String>,

    #[serde(default)]
    pub customer: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    pub amount: f64,

    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default)]
    pub reference: String,
}

/// Request body for editing a payment.
///
/// A plain field merge: changing `invoice_id` here does not re-run the
/// mark-paid cascade. Editing an id that does not exist is a no-op and the
/// payload is echoed back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePaymentRequest {
    /// Id of the payment to edit
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
