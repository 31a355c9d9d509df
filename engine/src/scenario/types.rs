//! Scenario parameters and results
//!
//! Parameter structs come in from the caller (the conversational layer maps
//! user intent onto them); result structs go back out as plain numbers,
//! sentinels and bands. Each result lives only for the duration of one
//! query - nothing in here touches stored history.
//!
//! CRITICAL: All money values are i64 (cents); percent deltas are f64
//! (`-20.0` means "cut by 20%").

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::health::{RoundType, RunwayBand, UnitEconomicsBand};
use crate::numeric::{MetricValue, Runway};

/// Errors for malformed scenario input. Invalid parameters are reported,
/// never silently defaulted.
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("Monthly salary must be provided for the {role} position")]
    MissingSalary { role: String },

    #[error("Invalid scenario input: {reason}")]
    InvalidInput { reason: String },
}

// ============================================================================
// Projection
// ============================================================================

/// What-if deltas for the forward cash projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Revenue change, percent (e.g. -20.0)
    pub revenue_pct: f64,

    /// Overall expense change, percent, applied after the marketing delta
    pub expense_pct: f64,

    /// Marketing budget change, percent
    pub marketing_pct: Option<f64>,

    /// New absolute monthly marketing budget (cents). Takes precedence over
    /// `marketing_pct` when both are supplied.
    pub marketing_absolute: Option<i64>,

    /// How many months forward to walk the cash balance
    pub horizon_months: usize,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            revenue_pct: 0.0,
            expense_pct: 0.0,
            marketing_pct: None,
            marketing_absolute: None,
            horizon_months: 24,
        }
    }
}

/// Projected cash at one canonical milestone month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Months from now
    pub month: usize,

    /// Projected cash balance (cents), floored at zero
    pub projected_cash: i64,
}

/// Hypothetical trajectory under the adjusted figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub company_id: String,

    /// Monthly revenue after the revenue delta (cents)
    pub adjusted_revenue: f64,

    /// Monthly total expenses after marketing and expense deltas (cents)
    pub adjusted_expenses: f64,

    /// Monthly marketing budget after its delta (cents)
    pub adjusted_marketing: f64,

    /// Adjusted expenses minus adjusted revenue (cents/month)
    pub net_burn: f64,

    pub runway: Runway,
    pub runway_band: RunwayBand,

    /// True when the adjusted net burn is at or below zero; no depletion
    /// month exists in that case
    pub cash_positive: bool,

    /// First month the cash balance reaches zero, if within the horizon
    pub depletion_month: Option<usize>,

    /// Cash captured at the canonical milestone months within the horizon
    pub milestones: Vec<Milestone>,
}

// ============================================================================
// Hiring
// ============================================================================

/// Parameters for a hiring affordability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringParams {
    /// Role title, echoed back in results and errors
    pub role: String,

    /// Monthly salary per hire (cents). Required - omitting it is an error,
    /// not a default.
    pub monthly_salary: Option<i64>,

    /// Number of hires at that salary
    pub num_hires: u32,

    /// Months over which to project the total cost
    pub months_ahead: usize,
}

impl Default for HiringParams {
    fn default() -> Self {
        Self {
            role: "developer".to_string(),
            monthly_salary: None,
            num_hires: 1,
            months_ahead: 6,
        }
    }
}

/// Runway impact of adding headcount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringAffordability {
    pub role: String,

    /// Salary x hires (cents/month)
    pub monthly_cost: i64,

    /// Net burn after the added payroll (cents/month)
    pub new_net_burn: f64,

    pub current_runway: Runway,
    pub new_runway: Runway,

    /// new - current, in months; `None` when exactly one side is unbounded
    pub runway_delta_months: Option<i64>,

    /// Band for the post-hire runway
    pub new_runway_band: RunwayBand,

    /// monthly_cost x months_ahead (cents)
    pub total_cost_over_horizon: i64,

    /// Cash remaining after paying that total from current cash (cents)
    pub cash_after_horizon: i64,
}

// ============================================================================
// Fundraising
// ============================================================================

/// Parameters for sizing and analyzing a raise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundraisingParams {
    /// Amount to raise (cents). When omitted, the engine sizes the round
    /// from the runway target plus a safety buffer.
    pub raise_amount: Option<i64>,

    /// Runway the raise should fund, in months
    pub target_runway_months: u32,

    /// Pre-money valuation (cents), enables the dilution estimate
    pub pre_money_valuation: Option<i64>,
}

/// Raise sizing, post-raise runway and dilution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundraisingAnalysis {
    /// The raise analyzed (cents): the caller's figure, or the computed one
    pub raise_amount: i64,

    /// True when `raise_amount` was sized by the engine rather than supplied
    pub sized_by_engine: bool,

    /// Cash after the raise lands (cents)
    pub new_cash: i64,

    pub new_runway: Runway,

    /// raise / (pre-money + raise) x 100, when a valuation was given
    pub dilution_pct: Option<f64>,

    pub round_type: RoundType,
}

// ============================================================================
// Marketing scaling
// ============================================================================

/// Parameters for scaling the marketing budget up or down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketingScalingParams {
    /// Budget change, percent
    pub budget_change_pct: f64,

    /// Acquisition-efficiency change, percent (positive = each unit of spend
    /// acquires more customers than today)
    pub efficiency_change_pct: f64,
}

/// Projected acquisition under the scaled budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingScaling {
    /// Monthly marketing budget after the change (cents)
    pub adjusted_budget: f64,

    /// Customers acquired per cent of spend today
    pub baseline_acquisition_rate: MetricValue,

    /// Rate after the efficiency change
    pub scaled_acquisition_rate: MetricValue,

    /// Expected new customers per month at the adjusted budget
    pub projected_new_customers: MetricValue,

    /// CAC today, for comparison (cents)
    pub current_cac: MetricValue,

    /// Adjusted budget over projected new customers (cents)
    pub projected_cac: MetricValue,
}

// ============================================================================
// Churn sensitivity
// ============================================================================

/// Unit economics under one hypothetical churn rate, with ARPU and CAC held
/// at their current values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnImpact {
    /// The hypothetical monthly churn rate (percent)
    pub churn_rate_pct: f64,

    /// 1 / churn rate, months; unbounded at zero churn
    pub lifespan_months: MetricValue,

    pub ltv: MetricValue,

    pub ltv_cac_ratio: MetricValue,
    pub ltv_cac_band: UnitEconomicsBand,

    /// CAC / ARPU, months. Invariant: identical across every churn rate in a
    /// comparison, because neither CAC nor ARPU depends on churn.
    pub payback_months: MetricValue,
}

// ============================================================================
// Expense optimization
// ============================================================================

/// One expense category reviewed against the trailing total and the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReview {
    pub category: crate::models::ExpenseCategory,

    /// Trailing average spend (cents/month)
    pub monthly_avg: f64,

    /// Share of total trailing expenses, percent
    pub share_pct: f64,

    /// Planned spend for this category (cents/month)
    pub planned: i64,

    /// Actual over plan, percent of plan; sentinel-guarded for a zero plan
    pub over_plan_pct: MetricValue,

    /// Share exceeds the concentration threshold
    pub dominant: bool,

    /// Spend exceeds plan by more than the tolerance
    pub over_plan: bool,
}

/// Runway effect of one across-the-board proportional cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutScenario {
    /// Cut applied to total expenses, percent
    pub cut_pct: f64,

    /// Total expenses after the cut (cents/month)
    pub new_expenses: f64,

    /// Net burn after the cut (cents/month)
    pub new_net_burn: f64,

    pub new_runway: Runway,

    /// Months gained over the current runway; `None` when the cut tips the
    /// company from burning to cash-flow positive
    pub runway_extension_months: Option<i64>,
}

/// Category flags plus simulated proportional cuts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseOptimization {
    /// Months behind the trailing averages
    pub window_months: usize,

    /// Total trailing expenses (cents/month)
    pub total_monthly: f64,

    pub categories: Vec<CategoryReview>,

    pub cut_scenarios: Vec<CutScenario>,
}
