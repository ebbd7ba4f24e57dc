//! Key-value persistence behind the history store.

use std::collections::HashMap;

use crate::error::FraudScopeError;

/// A string blob store keyed by name, the shape of browser `localStorage`.
///
/// Writes replace the whole value for a key at once.
pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>, FraudScopeError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), FraudScopeError>;
}

/// In-process storage, used by tests and as a fallback when no persistent
/// store is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that fails every write, like a browser over its quota.
    pub fn rejecting_writes() -> Self {
        Self {
            entries: HashMap::new(),
            reject_writes: true,
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, FraudScopeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FraudScopeError> {
        if self.reject_writes {
            return Err(FraudScopeError::Storage(format!(
                "Write to '{}' rejected",
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use file::FileStorage;

#[cfg(feature = "cli")]
mod file {
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use tempfile::NamedTempFile;
    use tracing::debug;

    use super::StoragePort;
    use crate::error::FraudScopeError;

    /// Directory-backed storage: each key is a `<key>.json` file.
    ///
    /// Writes go to a temp file in the same directory and are renamed over
    /// the target, so a crash never leaves a half-written blob.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: PathBuf,
    }

    impl FileStorage {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{}.json", key))
        }
    }

    impl StoragePort for FileStorage {
        fn get(&self, key: &str) -> Result<Option<String>, FraudScopeError> {
            let path = self.path_for(key);
            match std::fs::read_to_string(&path) {
                Ok(content) => Ok(Some(content)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(FraudScopeError::Storage(format!(
                    "Failed to read {:?}: {}",
                    path, e
                ))),
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), FraudScopeError> {
            let path = self.path_for(key);
            let storage_err =
                |e: std::io::Error| FraudScopeError::Storage(format!("Failed to write {:?}: {}", path, e));

            std::fs::create_dir_all(&self.dir).map_err(storage_err)?;

            let mut temp = NamedTempFile::new_in(&self.dir).map_err(storage_err)?;
            temp.write_all(value.as_bytes()).map_err(storage_err)?;
            temp.flush().map_err(storage_err)?;
            temp.persist(&path).map_err(|e| storage_err(e.error))?;

            debug!("Wrote {} bytes to {:?}", value.len(), path);
            Ok(())
        }
    }
}
