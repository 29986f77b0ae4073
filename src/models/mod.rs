//! Data models representing stored entities and API payloads.
//!
//! This module contains all data structures that map to the JSON documents,
//! plus the request/response types of the HTTP surface.

use serde::Serialize;

/// Chart-of-accounts entry
pub mod account;
/// Contact-form payloads
pub mod contact;
/// Customer record and invoice history
pub mod customer;
/// Aggregated dashboard read models
pub mod dashboard;
/// Invoice record and create/edit payloads
pub mod invoice;
/// Lead record
pub mod lead;
/// Payment record
pub mod payment;

/// Plain acknowledgement body used by status-change endpoints.
///
/// ```json
/// {"message": "Invoice marked as paid"}
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
