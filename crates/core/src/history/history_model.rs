//! Donation history domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time_utils::same_month;

/// One donation, recorded after it has been applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: NaiveDateTime,
    pub case_id: u32,
    pub amount: Decimal,
    /// Wallet balance right after this donation
    pub balance_after: Decimal,
}

impl HistoryEntry {
    pub fn new(
        timestamp: NaiveDateTime,
        case_id: u32,
        amount: Decimal,
        balance_after: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            case_id,
            amount,
            balance_after,
        }
    }
}

/// Sum of donations made in the calendar month containing `now`.
pub fn monthly_total(entries: &[HistoryEntry], now: NaiveDateTime) -> Decimal {
    entries
        .iter()
        .filter(|entry| same_month(entry.timestamp, now))
        .fold(Decimal::ZERO, |total, entry| total.saturating_add(entry.amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_monthly_total_only_counts_current_month() {
        let entries = vec![
            HistoryEntry::new(at(2024, 2, 29), 301, dec!(7), dec!(93)),
            HistoryEntry::new(at(2024, 3, 1), 301, dec!(5), dec!(88)),
            HistoryEntry::new(at(2024, 3, 20), 302, dec!(2.50), dec!(85.50)),
            HistoryEntry::new(at(2023, 3, 20), 302, dec!(100), dec!(0)),
        ];
        assert_eq!(monthly_total(&entries, at(2024, 3, 31)), dec!(7.50));
        assert_eq!(monthly_total(&entries, at(2024, 2, 1)), dec!(7));
    }

    #[test]
    fn test_monthly_total_saturates() {
        let entries = vec![
            HistoryEntry::new(at(2024, 3, 1), 301, Decimal::MAX, dec!(0)),
            HistoryEntry::new(at(2024, 3, 2), 301, Decimal::MAX, dec!(0)),
        ];
        assert_eq!(monthly_total(&entries, at(2024, 3, 31)), Decimal::MAX);
    }

    #[test]
    fn test_monthly_total_empty() {
        assert_eq!(monthly_total(&[], at(2024, 3, 31)), Decimal::ZERO);
    }
}
