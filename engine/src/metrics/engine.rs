//! Metrics engine
//!
//! Stateless calculator turning a `CompanyLedger` into point-in-time and
//! trailing-window health metrics. Every method recomputes from the ledger
//! it is handed - there is no caching, no interior mutability and no ambient
//! "current company"; concurrent calls for different companies cannot
//! interleave because each call owns its inputs.

use crate::metrics::churn::{churn_series, trailing_churn_rate_pct, ChurnStep};
use crate::metrics::nrr::net_revenue_retention;
use crate::metrics::snapshot::{
    BurnReport, CashPosition, ExpenseAverages, LtvEstimate, MetricSnapshot, Provenance,
    TrailingAverages,
};
use crate::models::CompanyLedger;
use crate::numeric::{MetricValue, Runway};

/// Default trailing window for averaged metrics, in months.
pub const DEFAULT_WINDOW_MONTHS: usize = 3;

/// Window selector for metrics that can be computed over a recent slice or
/// the whole history (CAC is reported both ways).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// The last N months (or the whole history when shorter)
    Trailing(usize),

    /// Every record on file
    Lifetime,
}

/// A stateless calculator for deriving health metrics from a company ledger.
#[derive(Debug, Default)]
pub struct MetricsEngine;

impl MetricsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Current cash: initial cash plus each month's net cash flow, in order.
    pub fn current_cash(&self, ledger: &CompanyLedger) -> CashPosition {
        let mut cash = ledger.baseline().initial_cash;
        for record in ledger.records() {
            cash += record.net_cash_flow();
        }
        CashPosition {
            cash,
            months_elapsed: ledger.months_elapsed(),
        }
    }

    /// Trailing average burn against the onboarding plan.
    ///
    /// With no history yet, the planned figure stands in for the actual one
    /// and the report is flagged `Projected` so callers cannot mistake plan
    /// for measurement.
    pub fn burn_rate(&self, ledger: &CompanyLedger, window: usize) -> BurnReport {
        let planned = ledger.baseline().planned_burn();

        let (actual, window_months, provenance) = if ledger.is_empty() {
            (planned as f64, 0, Provenance::Projected)
        } else {
            let tail = ledger.trailing(window);
            let total: i64 = tail.iter().map(|r| r.total_expenses()).sum();
            (
                total as f64 / tail.len() as f64,
                tail.len(),
                Provenance::Actual,
            )
        };

        let variance = actual - planned as f64;
        BurnReport {
            window_months,
            actual,
            planned,
            variance,
            variance_pct: MetricValue::ratio(variance * 100.0, planned as f64),
            provenance,
        }
    }

    /// Runway in whole months at the given net burn. See `Runway::from_burn`.
    pub fn runway(&self, cash: i64, net_burn: f64) -> Runway {
        Runway::from_burn(cash, net_burn)
    }

    /// The month-by-month churn recurrence, seeded from the baseline.
    pub fn churn_series(&self, ledger: &CompanyLedger) -> Vec<ChurnStep> {
        churn_series(ledger.baseline(), ledger.records())
    }

    /// Average revenue per active customer per month (cents).
    ///
    /// Zero when the window has no active customers.
    pub fn arpu(&self, ledger: &CompanyLedger, window: usize) -> f64 {
        let trailing = self.trailing_averages(ledger, window);
        if trailing.active_customers > 0.0 {
            trailing.revenue / trailing.active_customers
        } else {
            0.0
        }
    }

    /// Customer acquisition cost: marketing spend over new customers in the
    /// selected window. `Unbounded` when money was spent but nobody signed.
    pub fn cac(&self, ledger: &CompanyLedger, window: Window) -> MetricValue {
        let records = match window {
            Window::Trailing(n) => ledger.trailing(n),
            Window::Lifetime => ledger.records(),
        };
        let marketing: i64 = records.iter().map(|r| r.expenses.marketing).sum();
        let new_customers: u32 = records.iter().map(|r| r.new_customers).sum();
        MetricValue::ratio(marketing as f64, new_customers as f64)
    }

    /// Lifetime value from ARPU and a monthly churn rate expressed as a
    /// decimal (0.05 = 5%/month).
    pub fn ltv(&self, arpu: f64, churn_rate_decimal: f64) -> LtvEstimate {
        let lifespan_months = if churn_rate_decimal > 0.0 {
            MetricValue::Finite(1.0 / churn_rate_decimal)
        } else {
            MetricValue::Unbounded
        };
        LtvEstimate {
            lifespan_months,
            ltv: lifespan_months.scale(arpu),
        }
    }

    /// Net revenue retention (percent) for the record at `index`.
    pub fn net_revenue_retention(
        &self,
        ledger: &CompanyLedger,
        index: usize,
    ) -> Option<MetricValue> {
        net_revenue_retention(ledger.records(), index)
    }

    /// Compose the full snapshot the scenario engine and presentation layer
    /// consume. Pure function of `(ledger, window)`.
    pub fn snapshot(&self, ledger: &CompanyLedger, window: usize) -> MetricSnapshot {
        let baseline = ledger.baseline();
        let position = self.current_cash(ledger);
        let burn = self.burn_rate(ledger, window);
        let trailing = self.trailing_averages(ledger, window);

        let net_burn = trailing.expenses.total() - trailing.revenue;
        let runway = Runway::from_burn(position.cash, net_burn);

        let arpu = if trailing.active_customers > 0.0 {
            trailing.revenue / trailing.active_customers
        } else {
            0.0
        };

        let cac = MetricValue::ratio(
            trailing.marketing_spend_total as f64,
            trailing.new_customers_total as f64,
        );

        let steps = self.churn_series(ledger);
        let avg_churn_rate_pct = trailing_churn_rate_pct(&steps, window);
        let ltv = self.ltv(arpu, avg_churn_rate_pct / 100.0);

        let nrr = if ledger.is_empty() {
            // No history: nothing has been retained or lost yet.
            MetricValue::Finite(100.0)
        } else {
            net_revenue_retention(ledger.records(), ledger.months_elapsed() - 1)
                .unwrap_or(MetricValue::Indeterminate)
        };

        let provenance = if ledger.is_empty() {
            Provenance::Projected
        } else {
            Provenance::Actual
        };

        MetricSnapshot {
            company_id: ledger.company_id().to_string(),
            months_elapsed: position.months_elapsed,
            window_months: window,
            cash: position.cash,
            burn,
            net_burn,
            runway,
            arpu,
            cac,
            ltv_cac_ratio: ltv.ltv.div(cac),
            ltv,
            avg_churn_rate_pct,
            nrr,
            trailing,
            planned_expenses: baseline.planned_expenses,
            target_revenue: baseline.target_revenue,
            provenance,
        }
    }

    /// Trailing-window averages, falling back to the onboarding plan when no
    /// history exists (the fallback is what `Provenance::Projected` marks).
    pub fn trailing_averages(&self, ledger: &CompanyLedger, window: usize) -> TrailingAverages {
        let baseline = ledger.baseline();
        if ledger.is_empty() {
            return TrailingAverages {
                months: 0,
                revenue: baseline.target_revenue as f64,
                expenses: ExpenseAverages::from(baseline.planned_expenses),
                active_customers: baseline.initial_customers as f64,
                new_customers_total: 0,
                marketing_spend_total: 0,
            };
        }

        let tail = ledger.trailing(window);
        let n = tail.len() as f64;

        let expenses = ExpenseAverages {
            product_dev: tail.iter().map(|r| r.expenses.product_dev).sum::<i64>() as f64 / n,
            manpower: tail.iter().map(|r| r.expenses.manpower).sum::<i64>() as f64 / n,
            marketing: tail.iter().map(|r| r.expenses.marketing).sum::<i64>() as f64 / n,
            operations: tail.iter().map(|r| r.expenses.operations).sum::<i64>() as f64 / n,
            other: tail.iter().map(|r| r.expenses.other).sum::<i64>() as f64 / n,
        };

        TrailingAverages {
            months: tail.len(),
            revenue: tail.iter().map(|r| r.revenue).sum::<i64>() as f64 / n,
            expenses,
            active_customers: tail.iter().map(|r| r.active_customers as i64).sum::<i64>() as f64
                / n,
            new_customers_total: tail.iter().map(|r| r.new_customers).sum(),
            marketing_spend_total: tail.iter().map(|r| r.expenses.marketing).sum(),
        }
    }
}
