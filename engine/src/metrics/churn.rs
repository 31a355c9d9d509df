//! Customer churn recurrence
//!
//! Churn is never recorded directly; it is reconstructed month by month from
//! the identity:
//!
//! ```text
//! previous_active + new_customers - churned = current_active
//! ```
//!
//! The recurrence is seeded with the baseline's initial customer count and
//! walks the history in order, so the series is deterministic and
//! order-sensitive by construction.
//!
//! # The clamp
//!
//! When the active count grows by more than new acquisitions alone explain
//! (data entry drift, reactivations the store doesn't model), the raw churned
//! figure goes negative. It is clamped to zero and the surplus is simply
//! lost. This is intentional, documented lossy behavior - not a bug to fix.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{MonthlyRecord, OnboardingBaseline};

/// One month of the churn recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChurnStep {
    pub month: NaiveDate,

    /// Active customers entering the month
    pub previous_active: u32,

    /// Customers acquired during the month
    pub new_customers: u32,

    /// Customers lost, clamped at zero (see module docs)
    pub churned: u32,

    /// Active customers at month end
    pub current_active: u32,

    /// churned / previous_active x 100; zero when there was nobody to lose
    pub churn_rate_pct: f64,

    /// current_active - previous_active (signed)
    pub net_growth: i64,
}

/// Run the recurrence over the full history.
pub fn churn_series(baseline: &OnboardingBaseline, records: &[MonthlyRecord]) -> Vec<ChurnStep> {
    let mut steps = Vec::with_capacity(records.len());
    let mut prev_active = baseline.initial_customers;

    for record in records {
        let current_active = record.active_customers;
        let new_customers = record.new_customers;

        let raw_churned = prev_active as i64 + new_customers as i64 - current_active as i64;
        let churned = raw_churned.max(0) as u32;

        let churn_rate_pct = if prev_active > 0 {
            churned as f64 / prev_active as f64 * 100.0
        } else {
            0.0
        };

        steps.push(ChurnStep {
            month: record.month,
            previous_active: prev_active,
            new_customers,
            churned,
            current_active,
            churn_rate_pct,
            net_growth: current_active as i64 - prev_active as i64,
        });

        prev_active = current_active;
    }

    steps
}

/// Average churn rate (percent) over the last `window` steps.
///
/// Zero when the series is empty.
pub fn trailing_churn_rate_pct(steps: &[ChurnStep], window: usize) -> f64 {
    let start = steps.len().saturating_sub(window);
    let tail = &steps[start..];
    if tail.is_empty() {
        return 0.0;
    }
    tail.iter().map(|s| s.churn_rate_pct).sum::<f64>() / tail.len() as f64
}
