//! File-backed key-value store.
//!
//! Keys map to fields of a single JSON object held in one file. The
//! file is read in full on every get and rewritten in full on every
//! set, which is fine at the scale of a personal plan list.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{KeyValueStore, StorageError};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(entries).map_err(|e| StorageError::Backend(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StorageError::Backend(e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
