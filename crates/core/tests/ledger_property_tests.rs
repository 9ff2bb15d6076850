//! Property-based integration tests for the ledger.
//!
//! These tests verify that the wallet and case invariants hold across
//! random sequences of deposits and donations, using `proptest`.

use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use giveone_core::cases::CaseStatus;
use giveone_core::history::monthly_total;
use giveone_core::utils::time_utils::Clock;
use giveone_core::{
    LedgerDocument, LedgerRepositoryTrait, LedgerService, LedgerServiceTrait, Result,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Default)]
struct MemoryRepository {
    stored: Mutex<Option<LedgerDocument>>,
}

impl LedgerRepositoryTrait for MemoryRepository {
    fn load(&self) -> Result<Option<LedgerDocument>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save(&self, document: &LedgerDocument) -> Result<()> {
        *self.stored.lock().unwrap() = Some(document.clone());
        Ok(())
    }
}

struct StepClock(Mutex<NaiveDateTime>);

impl Clock for StepClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().unwrap()
    }
}

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn make_service() -> (LedgerService, Arc<MemoryRepository>, Arc<StepClock>) {
    let repo = Arc::new(MemoryRepository::default());
    let clock = Arc::new(StepClock(Mutex::new(start())));
    let service = LedgerService::with_clock(repo.clone(), clock.clone());
    (service, repo, clock)
}

// =============================================================================
// Generators
// =============================================================================

/// Positive amounts in whole cents, up to $500.00.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=50_000).prop_map(|cents| Decimal::new(cents, 2))
}

#[derive(Debug, Clone)]
enum Op {
    Deposit(Decimal),
    Donate { case_index: usize, amount: Decimal },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_amount().prop_map(Op::Deposit),
        (0usize..9, arb_amount()).prop_map(|(case_index, amount)| Op::Donate { case_index, amount }),
    ]
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn deposit_adds_exactly(amounts in proptest::collection::vec(arb_amount(), 1..20)) {
        let (service, _, _) = make_service();
        for amount in amounts {
            let before = service.balance();
            let after = service.deposit(amount).unwrap();
            prop_assert_eq!(after, before + amount);
            prop_assert_eq!(service.balance(), after);
        }
    }

    #[test]
    fn non_positive_amounts_are_rejected(cents in -10_000i64..=0) {
        let (service, _, _) = make_service();
        service.deposit(Decimal::new(100, 0)).unwrap();
        let amount = Decimal::new(cents, 2);

        prop_assert!(service.deposit(amount).is_err());
        prop_assert!(service.donate(301, amount).is_err());
        prop_assert_eq!(service.balance(), Decimal::new(100, 0));
        prop_assert!(service.history().is_empty());
    }

    #[test]
    fn random_sequences_keep_invariants(ops in proptest::collection::vec(arb_op(), 1..40)) {
        let (service, repo, clock) = make_service();
        let case_ids: Vec<u32> = service.cases().iter().map(|c| c.case_id).collect();

        for op in ops {
            {
                let mut now = clock.0.lock().unwrap();
                *now += Duration::hours(7);
            }
            match op {
                Op::Deposit(amount) => {
                    let before = service.balance();
                    prop_assert_eq!(service.deposit(amount).unwrap(), before + amount);
                }
                Op::Donate { case_index, amount } => {
                    let case_id = case_ids[case_index];
                    let before = service.snapshot();
                    let case_before = service.get_case(case_id).unwrap();
                    let should_succeed = amount <= before.wallet.balance && !case_before.is_funded();

                    match service.donate(case_id, amount) {
                        Ok(receipt) => {
                            prop_assert!(should_succeed);
                            prop_assert_eq!(service.balance(), before.wallet.balance - amount);
                            prop_assert_eq!(service.history().len(), before.history.len() + 1);
                            let last = service.history().last().cloned().unwrap();
                            prop_assert_eq!(last.amount, amount);
                            prop_assert_eq!(last.balance_after, service.balance());
                            prop_assert_eq!(
                                receipt.case.raised,
                                (case_before.raised + amount).min(case_before.goal)
                            );
                        }
                        Err(_) => {
                            prop_assert!(!should_succeed);
                            prop_assert_eq!(service.snapshot(), before);
                        }
                    }
                }
            }

            prop_assert!(service.balance() >= Decimal::ZERO);
            for case in service.cases() {
                prop_assert!(case.raised >= Decimal::ZERO);
                prop_assert!(case.raised <= case.goal);
                prop_assert_eq!(case.status == CaseStatus::Funded, case.raised == case.goal);
            }
        }

        // the stored document always matches memory
        let stored = repo.stored.lock().unwrap().clone();
        if let Some(stored) = stored {
            prop_assert_eq!(stored, service.snapshot());
        }

        let doc = service.snapshot();
        let now = clock.now();
        let expected: Decimal = doc
            .history
            .iter()
            .filter(|e| e.timestamp.format("%Y-%m").to_string() == now.format("%Y-%m").to_string())
            .map(|e| e.amount)
            .sum();
        prop_assert_eq!(service.monthly_total(), expected);
        prop_assert_eq!(monthly_total(&doc.history, now), expected);

        service.reset().unwrap();
        prop_assert_eq!(service.snapshot(), LedgerDocument::default());
    }
}
