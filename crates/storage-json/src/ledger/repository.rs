use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use giveone_core::errors::Result;
use giveone_core::{LedgerDocument, LedgerRepositoryTrait};
use log::debug;

use crate::errors::StorageError;

/// Ledger document stored as one pretty-printed JSON file.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the target,
/// so a crash mid-write never leaves a half-written ledger behind.
#[derive(Debug)]
pub struct JsonLedgerRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLedgerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_locked(&self) -> std::result::Result<Option<LedgerDocument>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let document =
            serde_json::from_slice(&raw).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(document))
    }

    fn write_locked(&self, document: &LedgerDocument) -> std::result::Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(document)?;
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|source| StorageError::Write {
            path: temp.clone(),
            source,
        })?;
        fs::rename(&temp, &self.path).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

impl LedgerRepositoryTrait for JsonLedgerRepository {
    fn load(&self) -> Result<Option<LedgerDocument>> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let document = self.read_locked()?;
        debug!(
            "Loaded ledger from {} ({})",
            self.path.display(),
            if document.is_some() { "found" } else { "missing" }
        );
        Ok(document)
    }

    fn save(&self, document: &LedgerDocument) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        self.write_locked(document)?;
        debug!("Saved ledger to {}", self.path.display());
        Ok(())
    }
}
