//! App preferences stored alongside the ledger.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PREFERRED_BANK, DEFAULT_THEME};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
    pub preferred_bank: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            preferred_bank: DEFAULT_PREFERRED_BANK.to_string(),
        }
    }
}

/// Partial update; `None` keeps the current value, blank resets to default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub theme: Option<String>,
    pub preferred_bank: Option<String>,
}

impl Settings {
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(theme) = &update.theme {
            self.theme = non_blank_or(theme, DEFAULT_THEME);
        }
        if let Some(bank) = &update.preferred_bank {
            self.preferred_bank = non_blank_or(bank, DEFAULT_PREFERRED_BANK);
        }
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
