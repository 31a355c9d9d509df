//! Monthly financial record
//!
//! One record per company per calendar month, append-only, supplied by the
//! record store in ascending date order. Each record carries revenue, the
//! five expense categories, and the customer counts the churn recurrence
//! needs.
//!
//! CRITICAL: All money values are i64 (cents)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ledger::LedgerError;

/// The five expense categories tracked for every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    ProductDev,
    Manpower,
    Marketing,
    Operations,
    Other,
}

impl ExpenseCategory {
    /// All categories, in reporting order.
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::ProductDev,
        ExpenseCategory::Manpower,
        ExpenseCategory::Marketing,
        ExpenseCategory::Operations,
        ExpenseCategory::Other,
    ];
}

/// Per-category expense amounts for one month (i64 cents).
///
/// Also used for the baseline's planned monthly targets, where `other`
/// typically stays zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub product_dev: i64,
    pub manpower: i64,
    pub marketing: i64,
    pub operations: i64,
    pub other: i64,
}

impl ExpenseBreakdown {
    /// Sum across all five categories (cents).
    pub fn total(&self) -> i64 {
        self.product_dev + self.manpower + self.marketing + self.operations + self.other
    }

    /// Amount for a single category (cents).
    pub fn get(&self, category: ExpenseCategory) -> i64 {
        match category {
            ExpenseCategory::ProductDev => self.product_dev,
            ExpenseCategory::Manpower => self.manpower,
            ExpenseCategory::Marketing => self.marketing,
            ExpenseCategory::Operations => self.operations,
            ExpenseCategory::Other => self.other,
        }
    }

    /// Iterate `(category, amount)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, i64)> + '_ {
        ExpenseCategory::ALL.iter().map(|c| (*c, self.get(*c)))
    }

    fn validate(&self) -> Result<(), LedgerError> {
        for (category, amount) in self.iter() {
            if amount < 0 {
                return Err(LedgerError::NegativeAmount {
                    field: format!("{:?} expenses", category),
                    amount,
                });
            }
        }
        Ok(())
    }
}

/// One month of actuals for a company.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use startup_finance_core_rs::{ExpenseBreakdown, MonthlyRecord};
///
/// let record = MonthlyRecord::new(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     5_000_000, // $50,000.00 revenue in cents
///     ExpenseBreakdown {
///         product_dev: 1_500_000,
///         manpower: 2_000_000,
///         marketing: 800_000,
///         operations: 500_000,
///         other: 200_000,
///     },
///     12, // new customers
///     90, // active customers at month end
/// )
/// .unwrap();
/// assert_eq!(record.total_expenses(), 5_000_000);
/// assert_eq!(record.net_cash_flow(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Calendar month this record covers (first day of the month by
    /// convention; only ordering matters to the engine)
    pub month: NaiveDate,

    /// Revenue recognized this month (cents)
    pub revenue: i64,

    /// Expenses by category (cents)
    pub expenses: ExpenseBreakdown,

    /// Customers acquired during the month
    pub new_customers: u32,

    /// Active customers at period end
    pub active_customers: u32,
}

impl MonthlyRecord {
    /// Create a validated monthly record.
    ///
    /// Rejects negative revenue or any negative expense category. Counts are
    /// non-negative by construction (`u32`).
    pub fn new(
        month: NaiveDate,
        revenue: i64,
        expenses: ExpenseBreakdown,
        new_customers: u32,
        active_customers: u32,
    ) -> Result<Self, LedgerError> {
        if revenue < 0 {
            return Err(LedgerError::NegativeAmount {
                field: "revenue".to_string(),
                amount: revenue,
            });
        }
        expenses.validate()?;

        Ok(Self {
            month,
            revenue,
            expenses,
            new_customers,
            active_customers,
        })
    }

    /// Total expenses across all categories (cents).
    pub fn total_expenses(&self) -> i64 {
        self.expenses.total()
    }

    /// Revenue minus total expenses (cents). Negative when burning cash.
    pub fn net_cash_flow(&self) -> i64 {
        self.revenue - self.total_expenses()
    }
}
