//! Handler for the contact submission endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Relays a contact-form submission after a bot check.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "message": "Hello!",
///   "turnstile_token": "<widget token>"
/// }
/// ```
///
/// # Response
///
/// `200 OK` with `{ "success": true }` once the email has been handed to the
/// transport.
///
/// # Errors
///
/// - 400 Bad Request if validation fails
/// - 422 Unprocessable Entity if the token is rejected (the email is never sent)
/// - 502 Bad Gateway if the mail transport fails after a successful check
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    payload.validate()?;

    state.contact_service.submit(payload.into()).await?;

    Ok(Json(ContactResponse { success: true }))
}
