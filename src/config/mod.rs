//! Configuration loading and management for the shift ledger.
//!
//! This module loads the application configuration from a YAML file:
//! storage location, server address, default overtime policy and logging.
//!
//! # Example
//!
//! ```no_run
//! use hourtrackr::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hourtrackr.yaml").unwrap();
//! println!("Data directory: {}", config.config().storage.data_dir.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD_HOURS, LoggingConfig,
    OvertimePolicy, ServerConfig, StorageConfig,
};
