//! Wallet domain model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::money::require_positive;

/// The user's spendable balance. Never negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub balance: Decimal,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

impl Wallet {
    /// A zero balance stamped with the given time, as created at signup.
    pub fn opened_at(now: NaiveDateTime) -> Self {
        Self {
            balance: Decimal::ZERO,
            last_updated: Some(now),
        }
    }

    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }

    /// Adds funds. The amount must round to at least one cent and the new
    /// balance must stay representable.
    pub fn credit(&mut self, amount: Decimal, now: NaiveDateTime) -> Result<Decimal> {
        let amount = require_positive(amount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| ValidationError::InvalidInput("amount too large".to_string()))?;
        self.last_updated = Some(now);
        Ok(self.balance)
    }

    /// Removes funds, rejecting anything above the current balance.
    pub fn debit(&mut self, amount: Decimal, now: NaiveDateTime) -> Result<Decimal> {
        let amount = require_positive(amount)?;
        if !self.can_cover(amount) {
            return Err(ValidationError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            }
            .into());
        }
        self.balance -= amount;
        self.last_updated = Some(now);
        Ok(self.balance)
    }
}
