use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Wire representation of an error: machine-readable code plus context.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application error taxonomy.
///
/// - [`AppError::Validation`] - malformed or incomplete request payload
/// - [`AppError::VerificationFailed`] - CAPTCHA token rejected or the
///   verification service unreachable (fail-closed, never distinguished)
/// - [`AppError::DispatchFailed`] - the mail transport refused the message
/// - [`AppError::Internal`] - storage or other unexpected failures
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    VerificationFailed { message: String, details: Value },
    DispatchFailed { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn verification_failed(message: impl Into<String>, details: Value) -> Self {
        Self::VerificationFailed {
            message: message.into(),
            details,
        }
    }
    pub fn dispatch_failed(message: impl Into<String>, details: Value) -> Self {
        Self::DispatchFailed {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Flattens the error into its wire representation.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::VerificationFailed { message, details } => {
                ("verification_failed", message, details)
            }
            AppError::DispatchFailed { message, details } => {
                ("dispatch_failed", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::VerificationFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DispatchFailed { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", e);
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
        AppError::bad_request("Request validation failed", json!({ "fields": fields }))
    }
}
