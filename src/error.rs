//! Error types for the client.
//!
//! [`ApiError`] describes what went wrong talking to the remote service.
//! [`AppError`] is what the application services return; it classifies remote
//! failures against the allowlist of recognized error messages and knows the
//! user-facing text for each case.

use crate::domain::form::{FieldErrors, PathError};

/// Error message the service returns when a requested custom path is taken.
pub const ID_RESERVED: &str = "id-reserved";

/// Error message the service returns when a short path does not exist.
pub const NOT_FOUND: &str = "not-found";

/// Generic text shown for every failure outside the recognized set.
pub const UNHANDLED_MESSAGE: &str = "Unhandled exception, please try again later";

/// Failure of a single call to the remote API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    ///
    /// `message` is `error.message` from the error body, or the raw body text
    /// when the body has another shape.
    #[error("API rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns true if the service rejected the request with exactly `code`.
    pub fn has_message(&self, code: &str) -> bool {
        matches!(self, ApiError::Rejected { message, .. } if message == code)
    }
}

/// Application-level error returned by the services.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Local field validation failed; nothing was sent to the service.
    #[error("{0}")]
    Validation(FieldErrors),

    /// The statistics path failed local validation.
    #[error("{0}")]
    InvalidPath(#[from] PathError),

    #[error("Custom path '{path}' is already in use")]
    IdReserved { path: String },

    #[error("Short URL with path {path} not found")]
    NotFound { path: String },

    /// Any remote failure outside the recognized set.
    #[error("Unhandled API failure: {0}")]
    Unhandled(#[source] ApiError),

    #[error("No free short path found after {attempts} attempts")]
    PathsExhausted { attempts: usize },

    #[error("Failed to render QR code: {0}")]
    Qr(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Text to show the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => errors.to_string(),
            AppError::InvalidPath(err) => err.to_string(),
            AppError::IdReserved { .. } => {
                "Custom URL has been used please try again with another value".to_string()
            }
            AppError::NotFound { path } => format!("Short URL with path {path} not found"),
            AppError::Unhandled(_) | AppError::PathsExhausted { .. } => {
                UNHANDLED_MESSAGE.to_string()
            }
            AppError::Qr(_) | AppError::Configuration(_) => self.to_string(),
        }
    }

    /// Returns the field errors when local validation failed.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
