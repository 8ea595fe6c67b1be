//! Data Transfer Objects for the shortening service's JSON API.
//!
//! Field names follow the service's camelCase contract. Successful responses
//! wrap their payload in [`DataEnvelope`]; failures carry an [`ErrorBody`].

pub mod shorten;
pub mod stats;

use serde::{Deserialize, Serialize};

/// Success envelope: `{ "data": … }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Failure body: `{ "error": { "message": … } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorInfo {
                message: message.into(),
            },
        }
    }
}
