//! Chart-of-accounts data models and API request type.

use serde::{Deserialize, Serialize};

use crate::repository::Entity;

/// One accounting category of the chart of accounts.
///
/// # Document
///
/// Stored in `chart_of_accounts.json` under the `COA` key. Hand-maintained
/// documents may lack ids entirely; readers backfill them positionally
/// (1-based) without persisting, see
/// [`account_service::list`](crate::services::account_service::list).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier; 0 marks a record loaded without one
    #[serde(default)]
    pub id: i64,

    /// Ledger code, e.g. "4000"
    #[serde(default)]
    pub account_code: String,

    #[serde(default)]
    pub account_name: String,

    /// "Revenue", "Expense", "Asset", ...
    #[serde(default)]
    pub account_type: String,

    #[serde(default)]
    pub description: String,

    /// "Yes" or "No"; kept as a string for document compatibility
    #[serde(default = "default_vat_applicable")]
    pub vat_applicable: String,
}

fn default_vat_applicable() -> String {
    "No".to_string()
}

impl Entity for Account {
    const DOCUMENT: &'static str = "chart_of_accounts";
    const COLLECTION_KEY: &'static str = "COA";

    // The chart of accounts is reference data; reading an empty chart from
    // a fresh deployment is fine, unlike the operational collections.
    const TOLERATE_MISSING: bool = true;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Request body for adding or editing a chart-of-accounts entry.
///
/// Unlike the other entities, an edit overwrites every field with the
/// request values rather than merging, and editing a missing id is a
/// reported not-found rather than a silent no-op.
///
/// # JSON Example
///
/// ```json
/// {
///   "accountCode": "4000",
///   "accountName": "Sales Revenue",
///   "accountType": "Revenue",
///   "description": "Product and service sales",
///   "vatApplicable": true
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountRequest {
    pub account_code: String,

    pub account_name: String,

    pub account_type: String,

    #[serde(default)]
    pub description: String,

    /// Boolean in the request, stored as "Yes"/"No"
    #[serde(default)]
    pub vat_applicable: bool,
}

impl AccountRequest {
    /// The stored "Yes"/"No" form of `vat_applicable`.
    pub fn vat_applicable_label(&self) -> String {
        if self.vat_applicable { "Yes" } else { "No" }.to_string()
    }
}
