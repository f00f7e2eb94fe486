//! Response types for the shift ledger API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`LedgerError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::{Shift, Theme};

/// Message shown when a form yields no positive worked time.
pub const INVALID_DURATION_MESSAGE: &str =
    "Time inputs produce zero/negative minutes. Check break or times.";

/// Message shown when a required form field is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please complete all required fields.";

/// Body returned after a shift is added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftAdded {
    /// User-facing confirmation.
    pub message: String,
    /// The stored shift.
    pub shift: Shift,
}

/// Body carrying only a user-facing message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// User-facing message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body carrying the display theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponse {
    /// The stored theme, `null` when none was chosen.
    pub theme: Option<Theme>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a shift not found error response.
    pub fn shift_not_found(id: &str) -> Self {
        Self::with_details(
            "SHIFT_NOT_FOUND",
            format!("Shift not found: {}", id),
            "The ledger has no shift with this identifier",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LedgerError> for ApiErrorResponse {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::InvalidDuration { reason } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details("INVALID_DURATION", INVALID_DURATION_MESSAGE, reason),
            },
            LedgerError::MissingField { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_FIELD",
                    MISSING_FIELDS_MESSAGE,
                    format!("Required field '{}' was not provided", field),
                ),
            },
            LedgerError::Storage { key, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "The ledger could not be saved",
                    format!("{}: {}", key, message),
                ),
            },
            LedgerError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            LedgerError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
