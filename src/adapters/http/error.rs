//! JSON error body shared by every endpoint.

use serde::Serialize;
use serde_json::json;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Rejected input, naming the offending field.
    pub fn validation(error: &ValidationError) -> Self {
        Self::new(error.code(), error.to_string()).with_details(json!({ "field": error.field() }))
    }

    /// Body that could not be decoded at all.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
