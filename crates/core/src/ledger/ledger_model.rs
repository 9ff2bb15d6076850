//! The ledger document and its state transitions.
//!
//! Everything the app knows lives in one `LedgerDocument`. The methods here
//! validate fully before touching any field, so a rejected operation leaves
//! the document exactly as it was.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::autopay::{next_open_case_id, Autopay, AutopayUpdate};
use crate::cases::{default_cases, Case};
use crate::errors::{Result, ValidationError};
use crate::friends::Friend;
use crate::history::{monthly_total, HistoryEntry};
use crate::settings::Settings;
use crate::streaks;
use crate::users::User;
use crate::utils::money::require_positive;
use crate::wallet::Wallet;

/// The persisted state of the app.
///
/// Sections added after the first file format default when missing, so
/// older files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerDocument {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub wallet: Wallet,
    #[serde(default = "default_cases")]
    pub cases: Vec<Case>,
    /// Oldest first
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub autopay: Autopay,
    #[serde(default)]
    pub friends: Vec<Friend>,
    #[serde(default)]
    pub settings: Settings,
}

impl Default for LedgerDocument {
    fn default() -> Self {
        Self {
            user: None,
            wallet: Wallet::default(),
            cases: default_cases(),
            history: Vec::new(),
            autopay: Autopay::default(),
            friends: Vec::new(),
            settings: Settings::default(),
        }
    }
}

/// Result of a successful donation.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonationReceipt {
    pub entry: HistoryEntry,
    /// The case after the donation was applied
    pub case: Case,
    /// True when this donation pushed the case to its goal
    pub newly_funded: bool,
}

/// How `load` obtained the in-memory document.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Read from storage
    Loaded,
    /// Nothing stored yet; using defaults
    Missing,
    /// Stored data could not be read; using defaults
    Recovered(String),
}

impl LedgerDocument {
    /// A fresh document for a newly signed-up user: defaults everywhere and
    /// a zero wallet stamped at signup time.
    pub fn for_new_user(user: User, now: NaiveDateTime) -> Self {
        Self {
            user: Some(user),
            wallet: Wallet::opened_at(now),
            ..Self::default()
        }
    }

    /// Rejects an email that already belongs to the stored user.
    pub fn ensure_email_available(&self, email: &str) -> Result<()> {
        match &self.user {
            Some(user) if user.has_email(email) => {
                Err(ValidationError::DuplicateEmail(email.trim().to_string()).into())
            }
            _ => Ok(()),
        }
    }

    pub fn find_case(&self, case_id: u32) -> Option<&Case> {
        self.cases.iter().find(|case| case.case_id == case_id)
    }

    pub fn balance(&self) -> Decimal {
        self.wallet.balance
    }

    pub fn monthly_total(&self, now: NaiveDateTime) -> Decimal {
        monthly_total(&self.history, now)
    }

    /// Adds funds to the wallet and returns the new balance.
    pub fn deposit(&mut self, amount: Decimal, now: NaiveDateTime) -> Result<Decimal> {
        self.wallet.credit(amount, now)
    }

    /// Moves `amount` from the wallet to a case and logs it.
    ///
    /// Checks, in order: positive amount, case exists, case still open,
    /// amount covered by the balance. `raised` is capped at the goal; the
    /// wallet is debited by the full amount.
    pub fn donate(
        &mut self,
        case_id: u32,
        amount: Decimal,
        now: NaiveDateTime,
    ) -> Result<DonationReceipt> {
        let amount = require_positive(amount)?;

        let index = self
            .cases
            .iter()
            .position(|case| case.case_id == case_id)
            .ok_or(ValidationError::UnknownCase(case_id))?;
        if self.cases[index].is_funded() {
            return Err(ValidationError::CaseAlreadyFunded(case_id).into());
        }

        let balance_after = self.wallet.debit(amount, now)?;
        let case = &mut self.cases[index];
        let newly_funded = case.apply_donation(amount);
        let case = case.clone();

        let entry = HistoryEntry::new(now, case_id, amount, balance_after);
        self.history.push(entry.clone());

        if let Some(user) = self.user.as_mut() {
            streaks::record_donation(user, now);
        }

        Ok(DonationReceipt {
            entry,
            case,
            newly_funded,
        })
    }

    /// History with the most recent donation first, optionally truncated.
    pub fn history_newest_first(&self, limit: Option<usize>) -> Vec<HistoryEntry> {
        let iter = self.history.iter().rev().cloned();
        match limit {
            Some(n) => iter.take(n).collect(),
            None => iter.collect(),
        }
    }

    /// Zeroes the user's streak after a day without donations.
    pub fn break_streak_if_inactive(&mut self, now: NaiveDateTime) -> bool {
        self.user
            .as_mut()
            .map(|user| streaks::break_if_inactive(user, now))
            .unwrap_or(false)
    }

    pub fn configure_autopay(&mut self, update: &AutopayUpdate) -> Result<Autopay> {
        let amount = require_positive(update.amount)?;
        if let Some(case_id) = update.case_id {
            if self.find_case(case_id).is_none() {
                return Err(ValidationError::UnknownCase(case_id).into());
            }
        }
        self.autopay.enabled = update.enabled;
        self.autopay.amount = amount;
        self.autopay.case_id = update.case_id;
        Ok(self.autopay.clone())
    }

    /// Runs the daily autopay donation if it is due.
    ///
    /// A missing or funded target is swapped for the next open case. The
    /// run is skipped (returning `None`) when autopay is off, ran in the last
    /// 24 hours, has no open case to give to, or the wallet cannot cover it.
    pub fn run_autopay(&mut self, now: NaiveDateTime) -> Result<Option<DonationReceipt>> {
        if !self.autopay.enabled || self.autopay.amount <= Decimal::ZERO {
            return Ok(None);
        }

        let current = self.autopay.case_id;
        let target_open = current
            .and_then(|id| self.find_case(id))
            .map(Case::is_open)
            .unwrap_or(false);
        let target = if target_open {
            current
        } else {
            next_open_case_id(&self.cases, current)
        };
        let Some(target) = target else {
            return Ok(None);
        };
        self.autopay.case_id = Some(target);

        if self.autopay.ran_recently(now) || !self.wallet.can_cover(self.autopay.amount) {
            return Ok(None);
        }

        let receipt = self.donate(target, self.autopay.amount, now)?;
        self.autopay.last_run_at = Some(now);
        if !receipt.case.is_open() {
            self.autopay.case_id = next_open_case_id(&self.cases, Some(target));
        }
        Ok(Some(receipt))
    }

    pub fn add_friend(&mut self, friend: Friend) -> Friend {
        self.friends.push(friend.clone());
        friend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::CaseStatus;
    use crate::errors::Error;
    use crate::users::NewUser;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn signed_up() -> LedgerDocument {
        let user = NewUser::new("Jane", "Doe", "jane@x.com", "pw").into_user("h".into(), at(1, 0));
        LedgerDocument::for_new_user(user, at(1, 0))
    }

    fn small_case(doc: &mut LedgerDocument, goal: Decimal) -> u32 {
        let case = &mut doc.cases[0];
        case.goal = goal;
        case.raised = Decimal::ZERO;
        case.case_id
    }

    #[test]
    fn test_default_document() {
        let doc = LedgerDocument::default();
        assert!(doc.user.is_none());
        assert_eq!(doc.balance(), Decimal::ZERO);
        assert!(doc.wallet.last_updated.is_none());
        assert_eq!(doc.cases.len(), 9);
        assert!(doc.cases.iter().all(|c| c.status == CaseStatus::Open));
        assert!(doc.history.is_empty());
        assert!(doc.friends.is_empty());
        assert!(!doc.autopay.enabled);
    }

    #[test]
    fn test_example_flow() {
        let mut doc = signed_up();
        assert_eq!(doc.balance(), Decimal::ZERO);
        assert_eq!(doc.deposit(dec!(50), at(1, 9)).unwrap(), dec!(50));

        let case_id = small_case(&mut doc, dec!(10));
        let receipt = doc.donate(case_id, dec!(10), at(1, 10)).unwrap();

        assert!(receipt.newly_funded);
        assert_eq!(receipt.case.raised, dec!(10));
        assert_eq!(receipt.case.status, CaseStatus::Funded);
        assert_eq!(doc.balance(), dec!(40));
        assert_eq!(doc.history.len(), 1);
        assert_eq!(doc.history[0].amount, dec!(10));
        assert_eq!(doc.history[0].balance_after, dec!(40));
    }

    #[test]
    fn test_donate_to_funded_case_is_rejected() {
        let mut doc = signed_up();
        doc.deposit(dec!(50), at(1, 9)).unwrap();
        let case_id = small_case(&mut doc, dec!(10));
        doc.donate(case_id, dec!(10), at(1, 10)).unwrap();

        let err = doc.donate(case_id, dec!(1), at(1, 11)).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::CaseAlreadyFunded(_))
        ));
        assert_eq!(doc.balance(), dec!(40));
        assert_eq!(doc.history.len(), 1);
    }

    #[test]
    fn test_donate_over_remaining_caps_raised_but_debits_full_amount() {
        let mut doc = signed_up();
        doc.deposit(dec!(50), at(1, 9)).unwrap();
        let case_id = small_case(&mut doc, dec!(10));

        let receipt = doc.donate(case_id, dec!(25), at(1, 10)).unwrap();
        assert_eq!(receipt.case.raised, dec!(10));
        assert_eq!(doc.balance(), dec!(25));
        assert_eq!(receipt.entry.amount, dec!(25));
    }

    #[test]
    fn test_rejected_donations_leave_document_untouched() {
        let mut doc = signed_up();
        doc.deposit(dec!(5), at(1, 9)).unwrap();
        let before = doc.clone();

        assert!(doc.donate(301, dec!(0), at(1, 10)).is_err());
        assert!(doc.donate(301, dec!(-1), at(1, 10)).is_err());
        assert!(doc.donate(301, dec!(5.01), at(1, 10)).is_err());
        let err = doc.donate(999, dec!(1), at(1, 10)).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::UnknownCase(999))));

        assert_eq!(doc, before);
    }

    #[test]
    fn test_donation_updates_streak() {
        let mut doc = signed_up();
        doc.deposit(dec!(10), at(1, 9)).unwrap();
        doc.donate(301, dec!(1), at(1, 10)).unwrap();
        doc.donate(302, dec!(1), at(2, 9)).unwrap();
        assert_eq!(doc.user.as_ref().unwrap().streak_days, 2);

        assert!(doc.break_streak_if_inactive(at(4, 0)));
        assert_eq!(doc.user.as_ref().unwrap().streak_days, 0);
    }

    #[test]
    fn test_duplicate_email_is_case_insensitive() {
        let doc = signed_up();
        assert!(doc.ensure_email_available("JANE@x.com").is_err());
        assert!(doc.ensure_email_available("john@x.com").is_ok());
        assert!(LedgerDocument::default()
            .ensure_email_available("jane@x.com")
            .is_ok());
    }

    #[test]
    fn test_history_newest_first() {
        let mut doc = signed_up();
        doc.deposit(dec!(10), at(1, 9)).unwrap();
        doc.donate(301, dec!(1), at(1, 10)).unwrap();
        doc.donate(302, dec!(2), at(1, 11)).unwrap();
        doc.donate(303, dec!(3), at(1, 12)).unwrap();

        let newest = doc.history_newest_first(Some(2));
        assert_eq!(newest.len(), 2);
        assert_eq!(newest[0].case_id, 303);
        assert_eq!(newest[1].case_id, 302);
        assert_eq!(doc.history[0].case_id, 301);
    }

    #[test]
    fn test_missing_sections_default_on_deserialize() {
        let json = r#"{"wallet":{"balance":12.5}}"#;
        let doc: LedgerDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.balance(), dec!(12.5));
        assert_eq!(doc.cases, default_cases());
        assert_eq!(doc.autopay, Autopay::default());
        assert_eq!(doc.settings, Settings::default());
    }

    #[test]
    fn test_configure_autopay_validates() {
        let mut doc = signed_up();
        let bad_amount = AutopayUpdate {
            enabled: true,
            amount: dec!(0),
            case_id: None,
        };
        assert!(doc.configure_autopay(&bad_amount).is_err());

        let bad_case = AutopayUpdate {
            enabled: true,
            amount: dec!(1),
            case_id: Some(42),
        };
        assert!(doc.configure_autopay(&bad_case).is_err());
        assert_eq!(doc.autopay, Autopay::default());
    }

    #[test]
    fn test_autopay_runs_once_per_day() {
        let mut doc = signed_up();
        doc.deposit(dec!(10), at(1, 8)).unwrap();
        doc.configure_autopay(&AutopayUpdate {
            enabled: true,
            amount: dec!(2),
            case_id: Some(305),
        })
        .unwrap();

        let receipt = doc.run_autopay(at(1, 9)).unwrap().unwrap();
        assert_eq!(receipt.entry.case_id, 305);
        assert_eq!(doc.balance(), dec!(8));

        assert!(doc.run_autopay(at(2, 8)).unwrap().is_none());
        assert!(doc.run_autopay(at(2, 9)).unwrap().is_some());
        assert_eq!(doc.balance(), dec!(6));
    }

    #[test]
    fn test_autopay_skips_when_disabled_or_broke() {
        let mut doc = signed_up();
        assert!(doc.run_autopay(at(1, 9)).unwrap().is_none());

        doc.configure_autopay(&AutopayUpdate {
            enabled: true,
            amount: dec!(2),
            case_id: None,
        })
        .unwrap();
        assert!(doc.run_autopay(at(1, 9)).unwrap().is_none());
        assert!(doc.history.is_empty());
        // picked a target even though the wallet was empty
        assert_eq!(doc.autopay.case_id, Some(301));
    }

    #[test]
    fn test_autopay_retargets_after_funding() {
        let mut doc = signed_up();
        doc.deposit(dec!(10), at(1, 8)).unwrap();
        let case_id = small_case(&mut doc, dec!(1));
        doc.configure_autopay(&AutopayUpdate {
            enabled: true,
            amount: dec!(1),
            case_id: Some(case_id),
        })
        .unwrap();

        let receipt = doc.run_autopay(at(1, 9)).unwrap().unwrap();
        assert!(receipt.newly_funded);
        assert_eq!(doc.autopay.case_id, Some(302));
    }

    #[test]
    fn test_autopay_retargets_from_funded_case_before_running() {
        let mut doc = signed_up();
        doc.deposit(dec!(10), at(1, 8)).unwrap();
        doc.cases[2].status = CaseStatus::Funded;
        doc.cases[2].raised = doc.cases[2].goal;
        doc.autopay = Autopay {
            enabled: true,
            amount: dec!(1),
            case_id: Some(303),
            last_run_at: None,
        };

        let receipt = doc.run_autopay(at(1, 9)).unwrap().unwrap();
        assert_eq!(receipt.entry.case_id, 301);
    }
}
