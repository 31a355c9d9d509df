//! What-if scenario analysis
//!
//! Forward projections and sensitivity comparisons built on top of a metric
//! snapshot: revenue/expense/marketing shocks, hiring, fundraising, churn
//! sensitivity and expense optimization. All pure; none of it touches the
//! stored history.

pub mod engine;
pub mod types;

// Re-exports
pub use engine::{
    ScenarioEngine, DOMINANT_SHARE_PCT, EXPENSE_CUT_STEPS_PCT, FUNDRAISE_SAFETY_BUFFER,
    MILESTONE_MONTHS, OVER_PLAN_TOLERANCE_PCT,
};
pub use types::{
    CategoryReview, ChurnImpact, CutScenario, ExpenseOptimization, FundraisingAnalysis,
    FundraisingParams, HiringAffordability, HiringParams, MarketingScaling,
    MarketingScalingParams, Milestone, ScenarioError, ScenarioParams, ScenarioProjection,
};
