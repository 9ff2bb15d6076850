use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDateTime;
use log::{debug, info, warn};
use rust_decimal::Decimal;

use super::ledger_model::{DonationReceipt, LedgerDocument, LoadOutcome};
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::autopay::{Autopay, AutopayUpdate};
use crate::cases::Case;
use crate::errors::{AuthError, Result, ValidationError};
use crate::friends::{leaderboard, Friend, LeaderboardEntry};
use crate::history::HistoryEntry;
use crate::settings::{Settings, SettingsUpdate};
use crate::users::{hash_password, verify_password, NewUser, User};
use crate::utils::time_utils::{Clock, SystemClock};
use crate::wallet::Wallet;

/// Owns the in-memory ledger and writes it through the repository after
/// every mutation.
///
/// Mutations run against a copy of the document. The copy replaces the
/// in-memory state only after it has been saved, so a failed write leaves
/// both memory and storage as they were.
pub struct LedgerService {
    repository: Arc<dyn LedgerRepositoryTrait>,
    clock: Arc<dyn Clock>,
    document: RwLock<LedgerDocument>,
}

impl LedgerService {
    /// Creates the service and loads the stored document.
    pub fn new(repository: Arc<dyn LedgerRepositoryTrait>) -> Self {
        Self::with_clock(repository, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: Arc<dyn LedgerRepositoryTrait>, clock: Arc<dyn Clock>) -> Self {
        let service = Self {
            repository,
            clock,
            document: RwLock::new(LedgerDocument::default()),
        };
        service.load();
        service
    }

    fn read(&self) -> RwLockReadGuard<'_, LedgerDocument> {
        self.document.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerDocument> {
        self.document.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Applies `op` to a copy of the document and persists the result.
    ///
    /// An unchanged document is not rewritten.
    fn mutate<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut LedgerDocument, NaiveDateTime) -> Result<T>,
    {
        let mut guard = self.write();
        let mut draft = guard.clone();
        let value = op(&mut draft, self.clock.now())?;
        if draft != *guard {
            self.repository.save(&draft)?;
            *guard = draft;
        }
        Ok(value)
    }
}

impl LedgerServiceTrait for LedgerService {
    fn load(&self) -> LoadOutcome {
        let (document, outcome) = match self.repository.load() {
            Ok(Some(document)) => (document, LoadOutcome::Loaded),
            Ok(None) => {
                debug!("No stored ledger found, starting from defaults");
                (LedgerDocument::default(), LoadOutcome::Missing)
            }
            Err(e) => {
                warn!("Stored ledger is unreadable, starting from defaults: {}", e);
                (LedgerDocument::default(), LoadOutcome::Recovered(e.to_string()))
            }
        };
        *self.write() = document;
        outcome
    }

    fn save(&self) -> Result<()> {
        self.repository.save(&self.read())
    }

    fn signup(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        self.read().ensure_email_available(&new_user.email)?;

        let password_hash = hash_password(&new_user.password)?;
        let user = self.mutate(|doc, now| {
            doc.ensure_email_available(&new_user.email)?;
            let user = new_user.into_user(password_hash, now);
            *doc = LedgerDocument::for_new_user(user.clone(), now);
            Ok(user)
        })?;

        info!("Signed up {} <{}>", user.username, user.email);
        Ok(user)
    }

    fn login(&self, email: &str, password: &str) -> Result<User> {
        let user = self.read().user.clone().ok_or(AuthError::NoUser)?;
        if !user.has_email(email) {
            return Err(AuthError::InvalidCredentials.into());
        }
        verify_password(password, &user.password_hash)?;
        debug!("Signed in {}", user.username);
        Ok(user)
    }

    fn deposit(&self, amount: Decimal) -> Result<Decimal> {
        let balance = self.mutate(|doc, now| doc.deposit(amount, now))?;
        info!("Deposited {}, balance is now {}", amount, balance);
        Ok(balance)
    }

    fn donate(&self, case_id: u32, amount: Decimal) -> Result<DonationReceipt> {
        let receipt = self.mutate(|doc, now| doc.donate(case_id, amount, now))?;
        info!(
            "Donated {} to case {}, balance is now {}",
            receipt.entry.amount, case_id, receipt.entry.balance_after
        );
        if receipt.newly_funded {
            info!("Case {} reached its goal", case_id);
        }
        Ok(receipt)
    }

    fn reset(&self) -> Result<()> {
        let mut guard = self.write();
        let fresh = LedgerDocument::default();
        self.repository.save(&fresh)?;
        *guard = fresh;
        info!("Ledger reset to defaults");
        Ok(())
    }

    fn refresh(&self) -> Result<Option<DonationReceipt>> {
        self.load();
        if self.break_streak_if_inactive()? {
            info!("Donation streak expired");
        }
        match self.run_autopay() {
            Ok(receipt) => Ok(receipt),
            Err(e) if e.is_validation() => {
                warn!("Autopay skipped: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn current_user(&self) -> Option<User> {
        self.read().user.clone()
    }

    fn wallet(&self) -> Wallet {
        self.read().wallet.clone()
    }

    fn balance(&self) -> Decimal {
        self.read().balance()
    }

    fn cases(&self) -> Vec<Case> {
        self.read().cases.clone()
    }

    fn get_case(&self, case_id: u32) -> Result<Case> {
        self.read()
            .find_case(case_id)
            .cloned()
            .ok_or_else(|| ValidationError::UnknownCase(case_id).into())
    }

    fn history(&self) -> Vec<HistoryEntry> {
        self.read().history.clone()
    }

    fn history_newest_first(&self, limit: Option<usize>) -> Vec<HistoryEntry> {
        self.read().history_newest_first(limit)
    }

    fn monthly_total(&self) -> Decimal {
        self.monthly_total_at(self.clock.now())
    }

    fn monthly_total_at(&self, now: NaiveDateTime) -> Decimal {
        self.read().monthly_total(now)
    }

    fn break_streak_if_inactive(&self) -> Result<bool> {
        self.mutate(|doc, now| Ok(doc.break_streak_if_inactive(now)))
    }

    fn autopay(&self) -> Autopay {
        self.read().autopay.clone()
    }

    fn configure_autopay(&self, update: AutopayUpdate) -> Result<Autopay> {
        let autopay = self.mutate(|doc, _| doc.configure_autopay(&update))?;
        debug!("Autopay updated: {:?}", autopay);
        Ok(autopay)
    }

    fn run_autopay(&self) -> Result<Option<DonationReceipt>> {
        let receipt = self.mutate(|doc, now| doc.run_autopay(now))?;
        if let Some(receipt) = &receipt {
            info!(
                "Autopay donated {} to case {}",
                receipt.entry.amount, receipt.entry.case_id
            );
        }
        Ok(receipt)
    }

    fn add_friend(&self, username: &str, streak_days: u32) -> Result<Friend> {
        let friend = Friend::new(username, streak_days)?;
        self.mutate(|doc, _| Ok(doc.add_friend(friend)))
    }

    fn friends(&self) -> Vec<Friend> {
        self.read().friends.clone()
    }

    fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let doc = self.read();
        leaderboard(doc.user.as_ref(), &doc.friends)
    }

    fn settings(&self) -> Settings {
        self.read().settings.clone()
    }

    fn update_settings(&self, update: SettingsUpdate) -> Result<Settings> {
        self.mutate(|doc, _| {
            doc.settings.apply(&update);
            Ok(doc.settings.clone())
        })
    }

    fn snapshot(&self) -> LedgerDocument {
        self.read().clone()
    }
}
