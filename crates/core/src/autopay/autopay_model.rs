//! Autopay configuration: a once-a-day donation from the wallet.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cases::Case;
use crate::constants::{DAILY_WINDOW_HOURS, DEFAULT_AUTOPAY_AMOUNT};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Autopay {
    pub enabled: bool,
    pub amount: Decimal,
    #[serde(default)]
    pub case_id: Option<u32>,
    #[serde(default)]
    pub last_run_at: Option<NaiveDateTime>,
}

impl Default for Autopay {
    fn default() -> Self {
        Self {
            enabled: false,
            amount: DEFAULT_AUTOPAY_AMOUNT,
            case_id: None,
            last_run_at: None,
        }
    }
}

impl Autopay {
    /// True while the last run is less than a day old.
    pub fn ran_recently(&self, now: NaiveDateTime) -> bool {
        self.last_run_at
            .map(|last| now - last < Duration::hours(DAILY_WINDOW_HOURS))
            .unwrap_or(false)
    }
}

/// Input model for changing the autopay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutopayUpdate {
    pub enabled: bool,
    pub amount: Decimal,
    pub case_id: Option<u32>,
}

/// First open case other than `exclude`, in list order.
pub fn next_open_case_id(cases: &[Case], exclude: Option<u32>) -> Option<u32> {
    cases
        .iter()
        .find(|case| case.is_open() && Some(case.case_id) != exclude)
        .map(|case| case.case_id)
}
