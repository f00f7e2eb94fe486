//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the ledger
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

use super::types::{AppConfig, OvertimePolicy};

/// Loads and provides access to the application configuration.
///
/// # File Layout
///
/// ```text
/// storage:
///   data_dir: ./data
/// server:
///   bind_address: 127.0.0.1:8787
/// overtime:
///   threshold_hours: 8
///   multiplier: 1
/// logging:
///   level: info
/// ```
///
/// # Example
///
/// ```no_run
/// use hourtrackr::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hourtrackr.yaml").unwrap();
/// println!("Overtime after {} hours", loader.overtime_policy().threshold_hours);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use hourtrackr::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml("server:\n  bind_address: 0.0.0.0:9000\n", "inline")?;
    /// assert_eq!(loader.config().server.bind_address, "0.0.0.0:9000");
    /// # Ok::<(), hourtrackr::error::LedgerError>(())
    /// ```
    pub fn from_yaml(content: &str, origin: &str) -> LedgerResult<Self> {
        // An empty document deserializes to unit, not to a defaulted struct.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config =
            serde_yaml::from_str::<AppConfig>(content).map_err(|e| LedgerError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Returns the default overtime policy.
    pub fn overtime_policy(&self) -> &OvertimePolicy {
        &self.config.overtime
    }
}
