//! JSON file storage for the GiveOne ledger.
//!
//! Implements `LedgerRepositoryTrait` from `giveone-core` on top of a single
//! pretty-printed JSON document, and provides timestamped exports.
//!
//! ```text
//!        core (domain)
//!             │
//!             ▼
//!   storage-json (this crate)
//!             │
//!             ▼
//!     giveone_data.json
//! ```

pub mod errors;
pub mod export;
pub mod ledger;

pub use errors::StorageError;
pub use export::{export_document, export_file_name};
pub use ledger::JsonLedgerRepository;

// Re-export from giveone-core for convenience
pub use giveone_core::errors::{Error, PersistenceError, Result};
