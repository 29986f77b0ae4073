//! Contact-form submission handler.

use axum::{Json, extract::State};

use crate::AppState;
use crate::error::AppError;
use crate::models::contact::{ContactFormRequest, ContactFormResponse};

/// Handle a contact-form submission.
///
/// # Endpoint
///
/// `POST /submit-form`
///
/// # Response
///
/// Always 200; the body carries the outcome so the form can show it
/// directly:
///
/// ```json
/// {"success": true, "message": "Thank you! We received your request."}
/// ```
///
/// Validation failures answer "All fields required"; delivery failures
/// answer "Email failed: ..." with the underlying reason.
pub async fn submit_form(
    State(state): State<AppState>,
    Json(request): Json<ContactFormRequest>,
) -> Json<ContactFormResponse> {
    let response = match process(&state, &request).await {
        Ok(()) => ContactFormResponse {
            success: true,
            message: "Thank you! We received your request.".to_string(),
        },
        Err(AppError::Validation(_)) => ContactFormResponse {
            success: false,
            message: "All fields required".to_string(),
        },
        Err(err) => {
            tracing::error!("Contact-form delivery failed: {:?}", err);
            ContactFormResponse {
                success: false,
                message: format!("Email failed: {err}"),
            }
        }
    };

    Json(response)
}

async fn process(state: &AppState, request: &ContactFormRequest) -> Result<(), AppError> {
    if !request.is_complete() {
        return Err(AppError::Validation(
            "name, company, email and phone are required".to_string(),
        ));
    }

    state.mailer.send_contact_form(request).await
}
