//! GiveOne Core - wallet, donation cases and history.
//!
//! This crate contains the ledger's business logic. It is storage-agnostic
//! and defines `LedgerRepositoryTrait`, which is implemented by the
//! `storage-json` crate.

pub mod autopay;
pub mod cases;
pub mod constants;
pub mod errors;
pub mod friends;
pub mod history;
pub mod ledger;
pub mod settings;
pub mod streaks;
pub mod users;
pub mod utils;
pub mod wallet;

pub use ledger::{
    DonationReceipt, LedgerDocument, LedgerRepositoryTrait, LedgerService, LedgerServiceTrait,
    LoadOutcome,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
