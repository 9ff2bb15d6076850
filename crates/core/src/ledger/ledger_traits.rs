//! Ledger repository and service traits.
//!
//! The repository trait hides where the document lives, so the core crate
//! stays free of file and serialization details.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::ledger_model::{DonationReceipt, LedgerDocument, LoadOutcome};
use crate::autopay::{Autopay, AutopayUpdate};
use crate::cases::Case;
use crate::errors::Result;
use crate::friends::{Friend, LeaderboardEntry};
use crate::history::HistoryEntry;
use crate::settings::{Settings, SettingsUpdate};
use crate::users::{NewUser, User};
use crate::wallet::Wallet;

/// Storage for the whole ledger document.
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Reads the stored document.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet. Unreadable or
    /// malformed data is an error; falling back to defaults is up to the
    /// caller.
    fn load(&self) -> Result<Option<LedgerDocument>>;

    /// Replaces the stored document.
    fn save(&self, document: &LedgerDocument) -> Result<()>;
}

/// Operations the presentation layer calls.
pub trait LedgerServiceTrait: Send + Sync {
    /// Re-reads the document, falling back to defaults on missing or corrupt data.
    fn load(&self) -> LoadOutcome;

    /// Writes the in-memory document.
    fn save(&self) -> Result<()>;

    fn signup(&self, new_user: NewUser) -> Result<User>;

    fn login(&self, email: &str, password: &str) -> Result<User>;

    fn deposit(&self, amount: Decimal) -> Result<Decimal>;

    fn donate(&self, case_id: u32, amount: Decimal) -> Result<DonationReceipt>;

    /// Restores the default document and overwrites the stored one.
    fn reset(&self) -> Result<()>;

    /// Reload, expire a stale streak and run autopay if due.
    fn refresh(&self) -> Result<Option<DonationReceipt>>;

    fn current_user(&self) -> Option<User>;

    fn wallet(&self) -> Wallet;

    fn balance(&self) -> Decimal;

    fn cases(&self) -> Vec<Case>;

    fn get_case(&self, case_id: u32) -> Result<Case>;

    /// Donations in the order they were made.
    fn history(&self) -> Vec<HistoryEntry>;

    fn history_newest_first(&self, limit: Option<usize>) -> Vec<HistoryEntry>;

    /// Total donated in the current calendar month.
    fn monthly_total(&self) -> Decimal;

    /// Total donated in the calendar month containing `now`.
    fn monthly_total_at(&self, now: NaiveDateTime) -> Decimal;

    fn break_streak_if_inactive(&self) -> Result<bool>;

    fn autopay(&self) -> Autopay;

    fn configure_autopay(&self, update: AutopayUpdate) -> Result<Autopay>;

    fn run_autopay(&self) -> Result<Option<DonationReceipt>>;

    fn add_friend(&self, username: &str, streak_days: u32) -> Result<Friend>;

    fn friends(&self) -> Vec<Friend>;

    fn leaderboard(&self) -> Vec<LeaderboardEntry>;

    fn settings(&self) -> Settings;

    fn update_settings(&self, update: SettingsUpdate) -> Result<Settings>;

    /// A copy of the full document, e.g. for export.
    fn snapshot(&self) -> LedgerDocument;
}
