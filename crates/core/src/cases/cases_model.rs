//! Donation case domain models.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle of a case. `Funded` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CaseStatus {
    #[default]
    Open,
    Funded,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Open => "Open",
            CaseStatus::Funded => "Funded",
        }
    }
}

/// A donation target with a funding goal.
///
/// Invariant: `0 <= raised <= goal`, and `status == Funded` exactly when
/// `raised == goal`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub case_id: u32,
    pub title: String,
    pub org_name: String,
    #[serde(alias = "description")]
    pub story: String,
    pub category: String,
    #[serde(default)]
    pub city: Option<String>,
    pub goal: Decimal,
    pub raised: Decimal,
    #[serde(default)]
    pub status: CaseStatus,
}

impl Case {
    pub fn is_funded(&self) -> bool {
        self.status == CaseStatus::Funded
    }

    pub fn is_open(&self) -> bool {
        self.status == CaseStatus::Open
    }

    /// Amount still needed to reach the goal.
    pub fn remaining(&self) -> Decimal {
        (self.goal - self.raised).max(Decimal::ZERO)
    }

    /// Whole percent funded, clamped to 100. A zero goal reads as 0%.
    pub fn percent_funded(&self) -> u8 {
        if self.goal <= Decimal::ZERO {
            return 0;
        }
        let pct = (self.raised / self.goal * Decimal::ONE_HUNDRED).floor();
        pct.min(Decimal::ONE_HUNDRED).to_u8().unwrap_or(0)
    }

    /// Adds a donation to `raised`, capped at the goal.
    ///
    /// Returns true when this donation moved the case to `Funded`.
    pub fn apply_donation(&mut self, amount: Decimal) -> bool {
        let was_funded = self.is_funded();
        // an overflowing sum is past any goal
        self.raised = self
            .raised
            .checked_add(amount)
            .map_or(self.goal, |sum| sum.min(self.goal));
        if self.raised >= self.goal {
            self.status = CaseStatus::Funded;
        }
        !was_funded && self.is_funded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn case(goal: Decimal, raised: Decimal) -> Case {
        Case {
            case_id: 1,
            title: "Test".to_string(),
            org_name: "Org".to_string(),
            story: "Story".to_string(),
            category: "Health".to_string(),
            city: None,
            goal,
            raised,
            status: CaseStatus::Open,
        }
    }

    #[test]
    fn test_percent_funded() {
        assert_eq!(case(dec!(2500), dec!(900)).percent_funded(), 36);
        assert_eq!(case(dec!(3), dec!(2)).percent_funded(), 66);
        assert_eq!(case(dec!(10), dec!(10)).percent_funded(), 100);
        assert_eq!(case(dec!(0), dec!(0)).percent_funded(), 0);
    }

    #[test]
    fn test_apply_donation_caps_at_goal() {
        let mut c = case(dec!(10), dec!(8));
        assert!(c.apply_donation(dec!(5)));
        assert_eq!(c.raised, dec!(10));
        assert_eq!(c.status, CaseStatus::Funded);
        assert_eq!(c.remaining(), Decimal::ZERO);
    }

    #[test]
    fn test_apply_donation_below_goal_stays_open() {
        let mut c = case(dec!(10), dec!(0));
        assert!(!c.apply_donation(dec!(9.99)));
        assert!(c.is_open());
        assert_eq!(c.remaining(), dec!(0.01));
    }

    #[test]
    fn test_apply_donation_near_max_caps_instead_of_overflowing() {
        let mut c = case(Decimal::MAX, Decimal::MAX - dec!(1));
        assert!(c.apply_donation(Decimal::MAX));
        assert_eq!(c.raised, Decimal::MAX);
        assert!(c.is_funded());
    }

    #[test]
    fn test_status_serializes_as_word() {
        assert_eq!(
            serde_json::to_string(&CaseStatus::Funded).unwrap(),
            "\"Funded\""
        );
    }

    #[test]
    fn test_case_reads_legacy_description_field() {
        let json = r#"{"caseId":7,"title":"T","orgName":"O","description":"old","category":"C",
            "goal":10.0,"raised":1.0}"#;
        let c: Case = serde_json::from_str(json).unwrap();
        assert_eq!(c.story, "old");
        assert_eq!(c.status, CaseStatus::Open);
        assert!(c.city.is_none());
    }
}
