//! Configuration types for the shift ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field has a default, so an empty file is a valid configuration.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default overtime threshold in hours.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default overtime multiplier.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::ONE;

/// The overtime policy applied when a shift form leaves it blank.
///
/// # Example
///
/// ```
/// use hourtrackr::config::OvertimePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = OvertimePolicy::default();
/// assert_eq!(policy.threshold_hours, Decimal::from(8));
/// assert_eq!(policy.multiplier, Decimal::ONE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimePolicy {
    /// Hours worked per shift before overtime accrues.
    pub threshold_hours: Decimal,
    /// Factor applied to the base rate for overtime minutes.
    pub multiplier: Decimal,
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
            multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

/// Where the ledger is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one file per stored key.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8787".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for the crate's own events when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Persistence settings.
    pub storage: StorageConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Default overtime policy for new shifts.
    pub overtime: OvertimePolicy,
    /// Logging settings.
    pub logging: LoggingConfig,
}
