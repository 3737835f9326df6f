//! DTOs for the contact submission endpoint.

use crate::domain::entities::ContactSubmission;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A contact-form post from the page.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    /// Sender's display name, embedded in the email subject.
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Sender's reply address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// The message itself.
    #[validate(length(min = 1, max = 5000))]
    pub message: String,

    /// Opaque Turnstile widget token, single-use.
    #[validate(length(min = 1, message = "Missing verification token"))]
    pub turnstile_token: String,
}

impl From<ContactRequest> for ContactSubmission {
    fn from(request: ContactRequest) -> Self {
        ContactSubmission {
            name: request.name,
            email: request.email,
            message: request.message,
            turnstile_token: request.turnstile_token,
        }
    }
}

/// Response for an accepted submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            turnstile_token: "tok".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_token_rejected() {
        let mut request = valid_request();
        request.turnstile_token = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_oversized_message_rejected() {
        let mut request = valid_request();
        request.message = "x".repeat(5001);
        assert!(request.validate().is_err());
    }
}
