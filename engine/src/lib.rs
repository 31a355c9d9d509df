//! Startup Finance Core - Rust Engine
//!
//! Deterministic financial health metrics and scenario simulation for
//! startups, computed from an onboarding baseline plus an ordered monthly
//! ledger.
//!
//! # Architecture
//!
//! - **models**: Validated domain types (OnboardingBaseline, MonthlyRecord,
//!   CompanyLedger)
//! - **numeric**: Tagged sentinel values (Finite / Unbounded / Indeterminate)
//!   and the Runway type
//! - **metrics**: Point-in-time and trailing-window health metrics
//! - **scenario**: What-if transforms over a metric snapshot
//! - **health**: Table-driven threshold classification
//! - **dashboard**: Chart-ready time series
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents); rates and ratios are f64
//! 2. Every computation is a pure function of its inputs: same ledger and
//!    parameters, same result - no caching, no hidden state
//! 3. The target company is an explicit argument on every call, so
//!    concurrent requests for different companies cannot interfere
//! 4. Undefined ratios are tagged sentinels, never float infinities or NaNs

// Module declarations
pub mod dashboard;
pub mod health;
pub mod metrics;
pub mod models;
pub mod numeric;
pub mod scenario;

// Re-exports for convenience
pub use health::{ChurnBand, HealthAssessor, RoundType, RunwayBand, UnitEconomicsBand};
pub use metrics::{
    BurnReport, CashPosition, ChurnStep, LtvEstimate, MetricSnapshot, MetricsEngine, Provenance,
    TrailingAverages, Window, DEFAULT_WINDOW_MONTHS,
};
pub use models::{
    CompanyLedger, ExpenseBreakdown, ExpenseCategory, LedgerError, MonthlyRecord,
    OnboardingBaseline,
};
pub use numeric::{MetricValue, Runway};
pub use scenario::{
    ChurnImpact, ExpenseOptimization, FundraisingAnalysis, FundraisingParams,
    HiringAffordability, HiringParams, MarketingScaling, MarketingScalingParams, ScenarioEngine,
    ScenarioError, ScenarioParams, ScenarioProjection,
};
