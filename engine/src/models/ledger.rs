//! Company ledger
//!
//! The validated input bundle for every engine computation: one baseline
//! plus the ordered monthly history for a single company. Construction is
//! the engine's trust boundary - a `CompanyLedger` that exists is known to
//! be chronologically ordered with non-negative amounts, so the metric and
//! scenario code never re-checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::baseline::OnboardingBaseline;
use super::monthly::MonthlyRecord;

/// Errors raised while assembling a company ledger from stored records.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("No onboarding baseline exists for company {company_id}")]
    MissingBaseline { company_id: String },

    #[error("Negative amount in {field}: {amount}")]
    NegativeAmount { field: String, amount: i64 },

    #[error("Records out of order: {prev} is not before {next}")]
    OutOfOrder {
        prev: chrono::NaiveDate,
        next: chrono::NaiveDate,
    },

    #[error("Two records share the month {month}")]
    DuplicateMonth { month: chrono::NaiveDate },
}

/// Baseline plus ordered monthly history for one company.
///
/// # Example
/// ```
/// use startup_finance_core_rs::CompanyLedger;
///
/// // A store with no baseline yields an explicit error, never defaults
/// let err = CompanyLedger::from_store("acme", None, vec![]).unwrap_err();
/// assert!(matches!(
///     err,
///     startup_finance_core_rs::LedgerError::MissingBaseline { .. }
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyLedger {
    baseline: OnboardingBaseline,
    records: Vec<MonthlyRecord>,
}

impl CompanyLedger {
    /// Build a ledger from a baseline and its monthly history.
    ///
    /// Enforces the record-sequence invariants:
    /// - baseline money fields are non-negative
    /// - record months are strictly ascending (no duplicates)
    pub fn new(
        baseline: OnboardingBaseline,
        records: Vec<MonthlyRecord>,
    ) -> Result<Self, LedgerError> {
        baseline.validate()?;

        for pair in records.windows(2) {
            if pair[0].month == pair[1].month {
                return Err(LedgerError::DuplicateMonth {
                    month: pair[0].month,
                });
            }
            if pair[0].month > pair[1].month {
                return Err(LedgerError::OutOfOrder {
                    prev: pair[0].month,
                    next: pair[1].month,
                });
            }
        }

        Ok(Self { baseline, records })
    }

    /// Build a ledger from what a record store returned for `company_id`.
    ///
    /// A missing baseline is an explicit `MissingBaseline` error; the engine
    /// never substitutes defaults for a company it has never onboarded.
    pub fn from_store(
        company_id: &str,
        baseline: Option<OnboardingBaseline>,
        records: Vec<MonthlyRecord>,
    ) -> Result<Self, LedgerError> {
        match baseline {
            Some(baseline) => Self::new(baseline, records),
            None => Err(LedgerError::MissingBaseline {
                company_id: company_id.to_string(),
            }),
        }
    }

    pub fn company_id(&self) -> &str {
        &self.baseline.company_id
    }

    pub fn baseline(&self) -> &OnboardingBaseline {
        &self.baseline
    }

    /// Full history, oldest first.
    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    /// Months of history on file.
    pub fn months_elapsed(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last `window` records (or the whole history when shorter).
    pub fn trailing(&self, window: usize) -> &[MonthlyRecord] {
        let start = self.records.len().saturating_sub(window);
        &self.records[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::monthly::ExpenseBreakdown;
    use chrono::NaiveDate;

    fn baseline() -> OnboardingBaseline {
        OnboardingBaseline {
            company_id: "acme".to_string(),
            company_name: "Acme".to_string(),
            industry: "saas".to_string(),
            target_revenue: 5_000_000,
            planned_expenses: ExpenseBreakdown {
                product_dev: 2_000_000,
                manpower: 3_000_000,
                marketing: 1_000_000,
                operations: 500_000,
                other: 0,
            },
            initial_cash: 50_000_000,
            initial_customers: 40,
            current_employees: 8,
            target_runway_months: 18,
            onboarding_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn record(year: i32, month: u32) -> MonthlyRecord {
        MonthlyRecord::new(
            NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            4_000_000,
            ExpenseBreakdown {
                product_dev: 1_500_000,
                manpower: 2_500_000,
                marketing: 900_000,
                operations: 400_000,
                other: 100_000,
            },
            10,
            50,
        )
        .unwrap()
    }

    #[test]
    fn test_accepts_ascending_months() {
        let ledger =
            CompanyLedger::new(baseline(), vec![record(2024, 2), record(2024, 3)]).unwrap();
        assert_eq!(ledger.months_elapsed(), 2);
    }

    #[test]
    fn test_rejects_duplicate_month() {
        let err =
            CompanyLedger::new(baseline(), vec![record(2024, 2), record(2024, 2)]).unwrap_err();
        assert!(matches!(err, LedgerError::DuplicateMonth { .. }));
    }

    #[test]
    fn test_rejects_out_of_order() {
        let err =
            CompanyLedger::new(baseline(), vec![record(2024, 3), record(2024, 2)]).unwrap_err();
        assert!(matches!(err, LedgerError::OutOfOrder { .. }));
    }

    #[test]
    fn test_rejects_negative_revenue() {
        let err = MonthlyRecord::new(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            -1,
            ExpenseBreakdown::default(),
            0,
            0,
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::NegativeAmount { .. }));
    }

    #[test]
    fn test_trailing_window_shorter_history() {
        let ledger = CompanyLedger::new(baseline(), vec![record(2024, 2)]).unwrap();
        assert_eq!(ledger.trailing(3).len(), 1);
    }

    #[test]
    fn test_trailing_window_takes_latest() {
        let ledger = CompanyLedger::new(
            baseline(),
            vec![record(2024, 2), record(2024, 3), record(2024, 4), record(2024, 5)],
        )
        .unwrap();
        let tail = ledger.trailing(3);
        assert_eq!(tail.len(), 3);
        assert_eq!(tail[0].month, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
