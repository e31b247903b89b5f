//! API error kinds and their HTTP mapping.
//!
//! Every failure leaves the server as the failure envelope
//! `{ success: false, message, errors }` with the status of its kind.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::validation::{self, VALIDATION_FAILED};
use roster_core::{ApiFailure, Violation};
use roster_store::StoreError;
use thiserror::Error;
use tracing::{error, warn};

/// Message for a body that could not be decoded as an employee.
pub const MALFORMED_BODY: &str = "Malformed request body.";

/// Message for a rejected duplicate email.
pub const EMAIL_EXISTS: &str = "Email already exists.";

/// Failure surfaced by a request handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-fixable input problem (400).
    #[error("{message}")]
    Validation {
        /// Summary line.
        message: String,
        /// Individual reasons.
        errors: Vec<String>,
    },
    /// The addressed employee does not exist (404).
    #[error("{0}")]
    NotFound(String),
    /// Uniqueness violation (409).
    #[error("{message}")]
    Conflict {
        /// Summary line.
        message: String,
        /// Detail of what collided.
        errors: Vec<String>,
    },
    /// Anything unanticipated (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Validation failure carrying the server wording of `violations`.
    pub fn validation(violations: &[Violation]) -> Self {
        Self::Validation {
            message: VALIDATION_FAILED.into(),
            errors: validation::server_messages(violations),
        }
    }

    /// Body that did not decode; `reason` is the decoder's explanation.
    pub fn malformed_body(reason: impl Into<String>) -> Self {
        Self::Validation {
            message: MALFORMED_BODY.into(),
            errors: vec![reason.into()],
        }
    }

    /// Email collision with the given detail line.
    pub fn email_conflict(detail: impl Into<String>) -> Self {
        Self::Conflict {
            message: EMAIL_EXISTS.into(),
            errors: vec![detail.into()],
        }
    }

    /// HTTP status for this kind.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Failure envelope for this error.
    pub fn to_failure(&self) -> ApiFailure {
        match self {
            Self::Validation { message, errors } | Self::Conflict { message, errors } => {
                ApiFailure::new(message.clone(), errors.clone())
            }
            Self::NotFound(message) | Self::Internal(message) => {
                ApiFailure::new(message.clone(), Vec::new())
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("store task failed: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.to_failure();
        if status.is_server_error() {
            error!(status = status.as_u16(), message = %body.message, "request failed");
        } else {
            warn!(
                status = status.as_u16(),
                message = %body.message,
                errors = ?body.errors,
                "request rejected"
            );
        }
        (status, Json(body)).into_response()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
