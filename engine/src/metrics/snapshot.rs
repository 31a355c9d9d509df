//! Derived metric value objects
//!
//! Everything in this file is ephemeral: constructed by `MetricsEngine` for
//! one call, handed to the caller (or to `ScenarioEngine`), and discarded.
//! Nothing here is cached between calls, so a snapshot always reflects the
//! exact ledger it was computed from.
//!
//! CRITICAL: All money values are i64 (cents); averages and rates are f64.

use serde::{Deserialize, Serialize};

use crate::models::ExpenseBreakdown;
use crate::numeric::{MetricValue, Runway};

/// Whether a figure was computed from recorded actuals or projected from the
/// onboarding plan because no monthly history exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Actual,
    Projected,
}

/// Cash on hand after replaying the full history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashPosition {
    /// Initial cash plus every month's net cash flow, in order (cents)
    pub cash: i64,

    /// Number of monthly records replayed
    pub months_elapsed: usize,
}

/// Trailing burn rate compared against the onboarding plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurnReport {
    /// Months actually averaged (may be fewer than requested)
    pub window_months: usize,

    /// Average total expenses over the window (cents/month); the planned
    /// figure when no history exists
    pub actual: f64,

    /// Planned monthly burn from the baseline (cents/month)
    pub planned: i64,

    /// actual - planned (cents/month, signed)
    pub variance: f64,

    /// Variance as a percent of plan; sentinel-guarded when the plan is zero
    pub variance_pct: MetricValue,

    pub provenance: Provenance,
}

/// Per-category trailing average spend (f64 cents/month).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseAverages {
    pub product_dev: f64,
    pub manpower: f64,
    pub marketing: f64,
    pub operations: f64,
    pub other: f64,
}

impl ExpenseAverages {
    pub fn total(&self) -> f64 {
        self.product_dev + self.manpower + self.marketing + self.operations + self.other
    }
}

impl From<ExpenseBreakdown> for ExpenseAverages {
    fn from(b: ExpenseBreakdown) -> Self {
        Self {
            product_dev: b.product_dev as f64,
            manpower: b.manpower as f64,
            marketing: b.marketing as f64,
            operations: b.operations as f64,
            other: b.other as f64,
        }
    }
}

/// Trailing-window averages and totals the scenario transforms work from.
///
/// Carried inside the snapshot so every scenario function is a pure function
/// of `(snapshot, parameters)` with no way to reach back into stored history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingAverages {
    /// Months averaged; zero when the figures are projected from the plan
    pub months: usize,

    /// Average monthly revenue (cents)
    pub revenue: f64,

    /// Average monthly spend per category (cents)
    pub expenses: ExpenseAverages,

    /// Average active customers over the window
    pub active_customers: f64,

    /// Total new customers acquired in the window
    pub new_customers_total: u32,

    /// Total marketing spend in the window (cents)
    pub marketing_spend_total: i64,
}

/// Lifespan and lifetime value for an average customer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LtvEstimate {
    /// Expected months a customer stays (1 / monthly churn rate)
    pub lifespan_months: MetricValue,

    /// ARPU x lifespan (cents); unbounded when no churn is observed
    pub ltv: MetricValue,
}

/// Point-in-time health metrics for one company.
///
/// The single input to every `ScenarioEngine` operation and the payload the
/// presentation layer renders. Plain numbers and sentinels only - formatting
/// belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Company this snapshot was computed for (explicit, never ambient)
    pub company_id: String,

    /// Months of recorded history behind these figures
    pub months_elapsed: usize,

    /// Trailing window requested for the averaged metrics
    pub window_months: usize,

    /// Current cash position (cents)
    pub cash: i64,

    /// Burn vs. plan over the trailing window
    pub burn: BurnReport,

    /// Average expenses minus average revenue (cents/month); negative when
    /// cash-flow positive
    pub net_burn: f64,

    pub runway: Runway,

    /// Average revenue per active customer per month (cents); zero when no
    /// active customers
    pub arpu: f64,

    /// Trailing customer acquisition cost (cents per customer)
    pub cac: MetricValue,

    pub ltv: LtvEstimate,

    /// LTV : CAC with sentinel propagation
    pub ltv_cac_ratio: MetricValue,

    /// Average churn rate over the trailing window (percent per month)
    pub avg_churn_rate_pct: f64,

    /// Net revenue retention for the latest month (percent)
    pub nrr: MetricValue,

    /// The averages the figures above were derived from
    pub trailing: TrailingAverages,

    /// Planned monthly spend per category, copied from the baseline so the
    /// expense-optimization scenario needs nothing beyond the snapshot
    pub planned_expenses: ExpenseBreakdown,

    /// Planned monthly revenue target (cents), from the baseline
    pub target_revenue: i64,

    pub provenance: Provenance,
}
