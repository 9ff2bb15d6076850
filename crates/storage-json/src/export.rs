//! Timestamped copies of the ledger document.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use giveone_core::constants::EXPORT_FILE_TIMESTAMP_FORMAT;
use giveone_core::errors::Result;
use giveone_core::LedgerDocument;
use log::info;

use crate::errors::StorageError;

/// File name an export taken at `now` is written to.
pub fn export_file_name(now: NaiveDateTime) -> String {
    format!(
        "giveone_export_{}.json",
        now.format(EXPORT_FILE_TIMESTAMP_FORMAT)
    )
}

/// Writes the whole document as pretty JSON into `dir` and returns the path.
///
/// An export taken in the same second as an earlier one replaces it.
pub fn export_document(
    document: &LedgerDocument,
    dir: &Path,
    now: NaiveDateTime,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| StorageError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(export_file_name(now));
    let json = serde_json::to_string_pretty(document).map_err(StorageError::from)?;
    fs::write(&path, json).map_err(|source| StorageError::Write {
        path: path.clone(),
        source,
    })?;

    info!("Exported ledger to {}", path.display());
    Ok(path)
}
