//! Snapshot storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Snapshot storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Where the persistent store writes its snapshot file
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl StorageConfig {
    /// Get the snapshot path as a PathBuf
    pub fn snapshot_path(&self) -> PathBuf {
        PathBuf::from(&self.snapshot_path)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_path.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAWMATCH__STORAGE__SNAPSHOT_PATH",
            ));
        }
        if !self.snapshot_path.ends_with(".json") {
            return Err(ValidationError::InvalidSnapshotPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> String {
    "data/snapshot.json".to_string()
}
