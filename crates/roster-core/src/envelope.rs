//! JSON envelopes wrapped around every API response.
//!
//! Success: `{ "success": true, "statusCode": 200, "data": ..., "message": "..." }`
//! Failure: `{ "success": false, "message": "...", "errors": ["..."] }`

use serde::{Deserialize, Serialize};

/// Success envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// `true` for any status below 400.
    #[serde(default)]
    pub success: bool,
    /// HTTP status echoed into the body.
    #[serde(default)]
    pub status_code: u16,
    /// Payload; `null` for deletes.
    #[serde(default)]
    pub data: T,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Wrap `data` with its status and message.
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            success: status_code < 400,
            status_code,
            data,
            message: message.into(),
        }
    }
}

/// Failure envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    /// Always `false`.
    #[serde(default)]
    pub success: bool,
    /// Summary of what went wrong.
    #[serde(default)]
    pub message: String,
    /// Individual reasons, possibly empty.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ApiFailure {
    /// Build a failure body.
    pub fn new(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors,
        }
    }

    /// The most specific text available: the message, else the first reason.
    pub fn best_message(&self) -> Option<&str> {
        if !self.message.is_empty() {
            return Some(&self.message);
        }
        self.errors.first().map(String::as_str).filter(|s| !s.is_empty())
    }
}
