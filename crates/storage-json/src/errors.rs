//! Storage-specific error types for file operations.
//!
//! These wrap `std::io` and `serde_json` errors and convert them to the
//! storage-agnostic `PersistenceError` defined in `giveone_core`.

use std::path::PathBuf;

use giveone_core::errors::{Error, PersistenceError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed ledger document in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize ledger document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        let message = err.to_string();
        match err {
            StorageError::Read { .. } => Error::Persistence(PersistenceError::ReadFailed(message)),
            StorageError::Write { .. } | StorageError::LockPoisoned => {
                Error::Persistence(PersistenceError::WriteFailed(message))
            }
            StorageError::Malformed { .. } | StorageError::Serialize(_) => {
                Error::Persistence(PersistenceError::Serialization(message))
            }
        }
    }
}
