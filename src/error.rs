//! Error types for the shift ledger.
//!
//! The computation core has a single failure, [`LedgerError::InvalidDuration`].
//! The remaining variants belong to the collaborators around it: form
//! validation, persistence and configuration.

use thiserror::Error;

/// The main error type for the shift ledger.
///
/// # Example
///
/// ```
/// use hourtrackr::error::LedgerError;
///
/// let error = LedgerError::MissingField {
///     field: "rate".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: rate");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The clock times and break leave no positive worked time, or a date or
    /// time could not be read at all.
    #[error("Invalid shift duration: {reason}")]
    InvalidDuration {
        /// What made the duration unusable.
        reason: String,
    },

    /// A required form field was absent or blank.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The key-value store could not be written.
    #[error("Storage error for '{key}': {message}")]
    Storage {
        /// The store key being accessed.
        key: String,
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl LedgerError {
    /// Builds an [`LedgerError::InvalidDuration`] from any displayable reason.
    pub fn invalid_duration(reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            reason: reason.into(),
        }
    }

    /// Builds a [`LedgerError::Storage`] for the given key.
    pub fn storage(key: &str, message: impl ToString) -> Self {
        Self::Storage {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
