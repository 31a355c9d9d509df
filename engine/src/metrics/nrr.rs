//! Net revenue retention estimate
//!
//! NRR compares revenue retained from existing customers against the prior
//! month. The ledger has no per-cohort revenue, so the continuing-customer
//! share is *estimated*: the month's ARPU weighted by the number of new
//! customers approximates new-customer revenue, and the remainder is treated
//! as continuing revenue.
//!
//! This is a known approximation inherited from the metric's definition, kept
//! as-is rather than silently "corrected". Replacing it requires cohort-level
//! revenue data the record store does not carry.

use crate::models::MonthlyRecord;
use crate::numeric::MetricValue;

/// NRR (percent) for the record at `index`.
///
/// Month 0 has no prior period and defaults to 100. Returns `None` when the
/// index is past the end of the history.
pub fn net_revenue_retention(records: &[MonthlyRecord], index: usize) -> Option<MetricValue> {
    let record = records.get(index)?;
    if index == 0 {
        return Some(MetricValue::Finite(100.0));
    }

    let prior_revenue = records[index - 1].revenue as f64;

    // ARPU-weighted estimate of how much of this month's revenue came from
    // customers acquired this month.
    let arpu = if record.active_customers > 0 {
        record.revenue as f64 / record.active_customers as f64
    } else {
        0.0
    };
    let estimated_new_revenue = arpu * record.new_customers as f64;
    let continuing_revenue = record.revenue as f64 - estimated_new_revenue;

    Some(MetricValue::ratio(
        continuing_revenue * 100.0,
        prior_revenue,
    ))
}
