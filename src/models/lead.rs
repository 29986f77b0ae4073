//! Lead data models and API request types.
//!
//! This module defines:
//! - `Lead`: a prospective customer record stored in `leads.json`
//! - `CreateLeadRequest`: request body for adding leads
//! - `UpdateLeadRequest`: request body for partial edits

use serde::{Deserialize, Serialize};

use crate::repository::Entity;

/// A prospective customer record.
///
/// # Document
///
/// Stored in `leads.json` under the `leads` key. Status is an open set of
/// strings; "won" is set when a lead is converted to a customer, and the
/// lead record itself is kept rather than deleted.
///
/// All descriptive fields are free-form strings (dates included) because
/// that is what the frontend submits and what the documents already hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
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

    /// Where the lead came from (referral, website, ...)
    #[serde(default)]
    pub source: String,

    /// Pipeline status: "new", "contacted", "won", "lost", ...
    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default)]
    pub added_date: String,

    #[serde(default)]
    pub last_contact: String,

    #[serde(default)]
    pub industry: String,

    #[serde(default)]
    pub annual_revenue: String,

    #[serde(default)]
    pub notes: String,
}

fn default_status() -> String {
    "new".to_string()
}

impl Entity for Lead {
    const DOCUMENT: &'static str = "leads";
    const COLLECTION_KEY: &'static str = "leads";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Request body for creating a new lead.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Jane Smith",
///   "company": "Acme LLC",
///   "email": "jane@acme.example",
///   "status": "contacted"
/// }
/// ```
///
/// # Validation
///
/// - `name` and `company` are required
/// - every other field defaults to an empty string, `status` to "new"
/// - unknown fields are rejected
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateLeadRequest {
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
    pub source: String,

    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default)]
    pub added_date: String,

    #[serde(default)]
    pub last_contact: String,

    #[serde(default)]
    pub industry: String,

    #[serde(default)]
    pub annual_revenue: String,

    #[serde(default)]
    pub notes: String,
}

/// Request body for editing a lead.
///
/// Only the fields present in the payload are applied; everything else on
/// the stored record is left untouched. Editing an id that does not exist
/// is a no-op and the payload is echoed back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateLeadRequest {
    /// Id of the lead to edit
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
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
