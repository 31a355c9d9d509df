//! Health metrics derived from the monthly ledger
//!
//! Point-in-time and trailing-window figures: cash position, burn vs. plan,
//! runway, the churn recurrence, ARPU, CAC, LTV and net revenue retention.
//! Everything is recomputed from the supplied ledger on every call.

pub mod churn;
pub mod engine;
pub mod nrr;
pub mod snapshot;

// Re-exports
pub use churn::{churn_series, trailing_churn_rate_pct, ChurnStep};
pub use engine::{MetricsEngine, Window, DEFAULT_WINDOW_MONTHS};
pub use nrr::net_revenue_retention;
pub use snapshot::{
    BurnReport, CashPosition, ExpenseAverages, LtvEstimate, MetricSnapshot, Provenance,
    TrailingAverages,
};
