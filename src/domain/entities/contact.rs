//! Contact form entities.
//!
//! Both structures are ephemeral: they live for the duration of a single
//! request and are never persisted.

/// A visitor's contact-form submission, including the anti-bot proof.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Opaque single-use token produced by the browser-side Turnstile widget.
    pub turnstile_token: String,
}

impl ContactSubmission {
    /// Strips the verification token, leaving the fields that go into the email.
    pub fn into_message(self) -> ContactMessage {
        ContactMessage {
            name: self.name,
            email: self.email,
            message: self.message,
        }
    }
}

/// The validated form fields that end up in the notification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Subject line for the notification email.
    pub fn subject(&self) -> String {
        format!("New message from {}", self.name)
    }

    /// Plain-text body with each field on its own labelled line.
    ///
    /// Fields are embedded verbatim; the structured mail API request keeps
    /// them out of any header position.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage: {}\n",
            self.name, self.email, self.message
        )
    }
}
