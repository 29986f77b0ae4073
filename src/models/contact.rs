//! Contact-form request and response types.

use serde::{Deserialize, Serialize};

/// A contact-form submission.
///
/// # Validation
///
/// `name`, `company`, `email` and `phone` must all be non-empty; `message`
/// is optional. Missing fields deserialize as empty strings so that the
/// handler can answer with the form-level "All fields required" message
/// instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactFormRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub message: Option<String>,
}

impl ContactFormRequest {
    /// Whether all required fields are filled in.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.company, &self.email, &self.phone]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Response body for the contact-form endpoint.
///
/// The endpoint always answers 200; `success` tells the submitter whether
/// the message actually went out.
#[derive(Debug, Serialize)]
pub struct ContactFormResponse {
    pub success: bool,
    pub message: String,
}
