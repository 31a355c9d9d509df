//! Domain models for the financial health engine

pub mod baseline;
pub mod ledger;
pub mod monthly;

// Re-exports
pub use baseline::OnboardingBaseline;
pub use ledger::{CompanyLedger, LedgerError};
pub use monthly::{ExpenseBreakdown, ExpenseCategory, MonthlyRecord};
