//! Onboarding baseline
//!
//! The immutable starting position recorded when a company is onboarded:
//! planned monthly targets, initial cash and customers, headcount and the
//! runway goal. Created once by the record store; the engine only reads it.
//!
//! CRITICAL: All money values are i64 (cents)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ledger::LedgerError;
use super::monthly::ExpenseBreakdown;

/// A company's financial position and plan at onboarding time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingBaseline {
    /// Unique company identifier. Every engine call receives the target
    /// company explicitly through its ledger; there is no ambient
    /// "current company" state anywhere in the crate.
    pub company_id: String,

    /// Display name (e.g. "Acme Robotics")
    pub company_name: String,

    /// Industry tag (free-form, e.g. "saas", "fintech")
    pub industry: String,

    /// Planned monthly revenue target (cents)
    pub target_revenue: i64,

    /// Planned monthly spend per expense category (cents)
    pub planned_expenses: ExpenseBreakdown,

    /// Cash in the bank at onboarding (cents)
    pub initial_cash: i64,

    /// Paying customers at onboarding
    pub initial_customers: u32,

    /// Headcount at onboarding
    pub current_employees: u32,

    /// Runway the founders are targeting, in months
    pub target_runway_months: u32,

    /// Date the company was onboarded
    pub onboarding_date: NaiveDate,
}

impl OnboardingBaseline {
    /// Total planned monthly burn across all categories (cents).
    pub fn planned_burn(&self) -> i64 {
        self.planned_expenses.total()
    }

    /// Planned net burn: planned expenses minus the revenue target (cents).
    /// Negative when the plan is cash-flow positive.
    pub fn planned_net_burn(&self) -> i64 {
        self.planned_burn() - self.target_revenue
    }

    /// Check the baseline's own invariants: no negative money fields.
    ///
    /// Called by `CompanyLedger::new`; exposed for record stores that want
    /// to validate at write time.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.target_revenue < 0 {
            return Err(LedgerError::NegativeAmount {
                field: "target_revenue".to_string(),
                amount: self.target_revenue,
            });
        }
        if self.initial_cash < 0 {
            return Err(LedgerError::NegativeAmount {
                field: "initial_cash".to_string(),
                amount: self.initial_cash,
            });
        }
        for (category, amount) in self.planned_expenses.iter() {
            if amount < 0 {
                return Err(LedgerError::NegativeAmount {
                    field: format!("planned {:?} expenses", category),
                    amount,
                });
            }
        }
        Ok(())
    }
}
