//! Chart-ready time series
//!
//! Structured records for the dashboard API: one point per month, plain
//! numbers only, in ledger order. Serialization to whatever the transport
//! wants is the caller's job; none of these carry formatted strings.
//!
//! CRITICAL: All money values are i64 (cents)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metrics::MetricSnapshot;
use crate::models::{CompanyLedger, ExpenseBreakdown};

/// Monthly cash movement plus the running balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub month: NaiveDate,
    pub revenue: i64,
    pub expenses: i64,
    pub net_cash_flow: i64,
    /// Balance after this month's flow is applied
    pub cash_balance: i64,
}

/// Monthly revenue against the onboarding target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: NaiveDate,
    pub revenue: i64,
    pub planned_revenue: i64,
}

/// Monthly spend split by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpensePoint {
    pub month: NaiveDate,
    pub expenses: ExpenseBreakdown,
    pub total: i64,
}

/// Projected month-end cash under the snapshot's net burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayPoint {
    /// Months from now (1-based)
    pub month_offset: usize,
    /// Projected balance (cents), floored at zero
    pub projected_cash: i64,
}

/// Revenue, expenses, net flow and running balance per recorded month.
pub fn cash_flow_series(ledger: &CompanyLedger) -> Vec<CashFlowPoint> {
    let mut cash = ledger.baseline().initial_cash;
    ledger
        .records()
        .iter()
        .map(|record| {
            cash += record.net_cash_flow();
            CashFlowPoint {
                month: record.month,
                revenue: record.revenue,
                expenses: record.total_expenses(),
                net_cash_flow: record.net_cash_flow(),
                cash_balance: cash,
            }
        })
        .collect()
}

/// Recorded revenue vs. the planned target, per month.
pub fn revenue_series(ledger: &CompanyLedger) -> Vec<RevenuePoint> {
    let planned = ledger.baseline().target_revenue;
    ledger
        .records()
        .iter()
        .map(|record| RevenuePoint {
            month: record.month,
            revenue: record.revenue,
            planned_revenue: planned,
        })
        .collect()
}

/// Per-category spend per month.
pub fn expense_breakdown_series(ledger: &CompanyLedger) -> Vec<ExpensePoint> {
    ledger
        .records()
        .iter()
        .map(|record| ExpensePoint {
            month: record.month,
            expenses: record.expenses,
            total: record.total_expenses(),
        })
        .collect()
}

/// Walk the snapshot's cash forward at its current net burn.
///
/// Stops at the horizon, or at the month the balance reaches zero. A
/// cash-flow-positive snapshot produces a rising series for the whole
/// horizon.
pub fn runway_projection(snapshot: &MetricSnapshot, horizon_months: usize) -> Vec<RunwayPoint> {
    let mut points = Vec::new();
    let mut cash = snapshot.cash as f64;
    for month_offset in 1..=horizon_months {
        cash -= snapshot.net_burn;
        if snapshot.net_burn > 0.0 && cash <= 0.0 {
            points.push(RunwayPoint {
                month_offset,
                projected_cash: 0,
            });
            break;
        }
        points.push(RunwayPoint {
            month_offset,
            projected_cash: cash.round() as i64,
        });
    }
    points
}
