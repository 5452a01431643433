//! File-based Snapshot Storage Adapter
//!
//! Persists the world snapshot as one JSON document on disk. Writes go to
//! a temporary file first and are renamed into place, so a crash mid-write
//! never leaves a torn document behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::snapshot::Snapshot;
use crate::ports::{SnapshotStorage, SnapshotStorageError};

/// File-based storage for the world snapshot
#[derive(Debug, Clone)]
pub struct FileSnapshotStorage {
    path: PathBuf,
}

impl FileSnapshotStorage {
    /// Create a new file storage writing to the given document path
    ///
    /// # Arguments
    /// * `path` - Where the JSON document lives, e.g. `./data/pawmatch.json`
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileSnapshotStorage::new("./data/pawmatch.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The document path this storage reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

impl SnapshotStorage for FileSnapshotStorage {
    fn load(&self) -> Result<Snapshot, SnapshotStorageError> {
        if !self.path.exists() {
            return Ok(Snapshot::new());
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| SnapshotStorageError::IoError(e.to_string()))?;

        serde_json::from_str(&json)
            .map_err(|e| SnapshotStorageError::DeserializationFailed(e.to_string()))
    }

    fn persist(&self, snapshot: &Snapshot) -> Result<(), SnapshotStorageError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .map_err(|e| SnapshotStorageError::IoError(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| SnapshotStorageError::SerializationFailed(e.to_string()))?;

        // Write-to-temp then rename keeps the document whole under crashes.
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| SnapshotStorageError::IoError(e.to_string()))?;
        fs::rename(&temp, &self.path).map_err(|e| SnapshotStorageError::IoError(e.to_string()))?;

        Ok(())
    }
}
