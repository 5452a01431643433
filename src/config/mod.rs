//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `PAWMATCH_` prefix and nested values use underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use pawmatch::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Snapshot file at {}", config.storage.snapshot_path);
//! ```

mod bootstrap;
mod error;
mod storage;

pub use bootstrap::{BootstrapAccount, BootstrapConfig};
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root engine configuration
///
/// Every section has working defaults, so a bare environment loads a
/// usable configuration. Load using [`EngineConfig::load()`] which reads
/// from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Snapshot storage (file path for the persistent store)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Staff accounts provisioned at startup
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAWMATCH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAWMATCH__STORAGE__SNAPSHOT_PATH=data/snapshot.json` ->
    ///   `storage.snapshot_path`
    /// - `PAWMATCH__BOOTSTRAP__ADMIN_EMAIL=admin@example.com` ->
    ///   `bootstrap.admin_email`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAWMATCH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.bootstrap.validate()?;
        Ok(())
    }
}
