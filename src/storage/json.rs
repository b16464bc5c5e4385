//! JSON-file-backed key-value storage

use super::traits::Storage;
use anyhow::Result;
use async_trait::async_trait;
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(String),
}

/// One file per key under a root directory, written atomically so a crash
/// mid-write never leaves a half-encoded list behind.
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Default storage root under the platform data directory.
    pub fn default_root() -> Option<PathBuf> {
        ProjectDirs::from("org", "amparo", "amparo-tui").map(|dirs| dirs.data_dir().to_path_buf())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read_sync(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(data) => {
                debug!(key, path = %path.display(), "storage read hit");
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    fn write_sync(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| StorageError::Io(e.to_string()))?;
        let path = self.key_path(key);
        let tmp = self.root.join(format!(
            ".tmp-{}-{}-{}.json",
            key,
            std::process::id(),
            unique_suffix()
        ));
        write_atomic(&tmp, &path, value.as_bytes())?;
        debug!(key, path = %path.display(), bytes = value.len(), "storage write committed");
        Ok(())
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_sync(key)?)
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.write_sync(key, value)?)
    }
}

fn write_atomic(tmp: &Path, final_path: &Path, data: &[u8]) -> Result<(), StorageError> {
    {
        let mut f = File::create(tmp).map_err(|e| StorageError::Io(e.to_string()))?;
        f.write_all(data)
            .map_err(|e| StorageError::Io(e.to_string()))?;
        f.sync_all().map_err(|e| StorageError::Io(e.to_string()))?;
    }
    fs::rename(tmp, final_path).map_err(|e| StorageError::Io(e.to_string()))?;
    // fsync the directory so the rename itself is durable
    if let Some(dir) = final_path.parent() {
        let dir_file = File::open(dir).map_err(|e| StorageError::Io(e.to_string()))?;
        dir_file
            .sync_all()
            .map_err(|e| StorageError::Io(e.to_string()))?;
    }
    Ok(())
}

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
}
