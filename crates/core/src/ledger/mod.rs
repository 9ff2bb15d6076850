//! Ledger module - the document, its repository contract and the service.

mod ledger_model;
mod ledger_service;
mod ledger_traits;

pub use ledger_model::{DonationReceipt, LedgerDocument, LoadOutcome};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
