//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Storage Errors**: Reading or writing a JSON document failed
/// - **Malformed Documents**: A document exists but cannot be parsed
/// - **Resource Errors**: Requested records not found
/// - **Validation Errors**: Required request fields missing or invalid
/// - **Email Errors**: Contact-form delivery failed
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A document read or write failed (e.g., missing file, permission error).
    ///
    /// This wraps any `std::io::Error` using the `#[from]` attribute, which
    /// automatically implements `From<std::io::Error> for AppError`.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A document exists on disk but could not be parsed or serialized.
    #[error("Malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Requested lead does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Lead not found")]
    LeadNotFound,

    /// Requested customer does not exist.
    #[error("Customer not found")]
    CustomerNotFound,

    /// Requested invoice does not exist.
    #[error("Invoice not found")]
    InvoiceNotFound,

    /// Requested payment does not exist.
    #[error("Payment not found")]
    PaymentNotFound,

    /// Requested chart-of-accounts entry does not exist.
    #[error("Account not found")]
    AccountNotFound,

    /// Request payload failed validation.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An email could not be composed or delivered.
    #[error("{0}")]
    Email(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `*NotFound` → 404 Not Found
/// - `Validation` → 400 Bad Request
/// - `Email` → 502 Bad Gateway
/// - `Storage` / `Malformed` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::LeadNotFound => (StatusCode::NOT_FOUND, "lead_not_found", self.to_string()),
            AppError::CustomerNotFound => {
                (StatusCode::NOT_FOUND, "customer_not_found", self.to_string())
            }
            AppError::InvoiceNotFound => {
                (StatusCode::NOT_FOUND, "invoice_not_found", self.to_string())
            }
            AppError::PaymentNotFound => {
                (StatusCode::NOT_FOUND, "payment_not_found", self.to_string())
            }
            AppError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::Validation(ref msg) => {
                (StatusCode::BAD_REQUEST, "validation_failed", msg.clone())
            }
            AppError::Email(ref msg) => (StatusCode::BAD_GATEWAY, "email_error", msg.clone()),
            AppError::Storage(_) | AppError::Malformed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
